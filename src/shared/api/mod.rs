// src/shared/api/mod.rs
mod json_config;
mod payload_config;
mod response;

pub use json_config::custom_json_config;
pub use payload_config::custom_payload_config;
pub use response::{ApiError, ApiResponse};

#[cfg(test)]
mod tests {
    #[test]
    fn sources_start_with_their_path() {
        for (path, source) in [
            ("src/shared/api/mod.rs", include_str!("mod.rs")),
            ("src/shared/api/response.rs", include_str!("response.rs")),
            ("src/shared/api/json_config.rs", include_str!("json_config.rs")),
            ("src/shared/api/payload_config.rs", include_str!("payload_config.rs")),
            ("src/api/schemas.rs", include_str!("../../api/schemas.rs")),
        ] {
            assert_eq!(source.lines().next(), Some(format!("// {path}").as_str()));
        }
    }
}
