pub const MAP_CENTER: [f64; 2] = [37.5665, 126.9780];
pub const MAP_ZOOM: u8 = 13;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const DEFAULT_API_ROOT: &str = "http://localhost:8000/api/predict/";

/// Prediction endpoint, overridable at build time with `FRONTEND_API_ROOT`.
pub fn api_root() -> String {
    normalize_api_root(option_env!("FRONTEND_API_ROOT").unwrap_or(DEFAULT_API_ROOT))
}

// The service only routes the slash-terminated path.
fn normalize_api_root(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}
