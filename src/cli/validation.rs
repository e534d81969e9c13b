use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(limit) = args.item_limit {
        if limit == 0 {
            return Err("invalid item-limit, expected positive integer".to_string());
        }
    }
    if let Some(raw) = args.api_route.as_deref() {
        crate::utils::normalize_base_path(raw)
            .map_err(|e| format!("invalid --api-route '{raw}': {e}"))?;
    }
    Ok(())
}
