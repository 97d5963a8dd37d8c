//! Short display names for dictionary paths.

use std::path::Path;

/// Scheme prefix of dictionaries bundled as package resources.
pub const ASSET_SCHEME: &str = "asset:";

/// Shorten a dictionary path for display.
///
/// - `asset:<module>:<path>` becomes `<module>:<stem>`, keeping only the
///   module's top-level package.
/// - Paths under `root` are made relative to it.
/// - A leading `dict/` component is dropped.
/// - The file extension is removed.
///
/// Falls back to the input path when shortening leaves nothing.
pub fn short_name(path: &str, root: Option<&Path>) -> String {
    if let Some(rest) = path.strip_prefix(ASSET_SCHEME) {
        if let Some((module, resource)) = rest.split_once(':') {
            let module = module.split('.').next().unwrap_or(module);
            let file = resource.rsplit('/').next().unwrap_or(resource);
            return format!("{}:{}", module, strip_extension(file));
        }
    }

    let relative = root
        .and_then(|root| Path::new(path).strip_prefix(root).ok())
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let relative = relative.strip_prefix("dict/").unwrap_or(&relative);

    let short = strip_extension(relative);
    if short.is_empty() {
        path.to_string()
    } else {
        short.to_string()
    }
}

/// Drop the extension of the final path component.
fn strip_extension(path: &str) -> &str {
    let file_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[file_start..].rfind('.') {
        Some(dot) => &path[..file_start + dot],
        None => path,
    }
}
