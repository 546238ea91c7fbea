// src/shared/api/payload_config.rs
use actix_web::web::PayloadConfig;

/// Size limit for bodies read as raw text or bytes. The actix default of
/// 256 KiB is smaller than a full exported document may be.
pub fn custom_payload_config(limit: usize) -> PayloadConfig {
    PayloadConfig::new(limit)
}
