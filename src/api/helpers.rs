//! Shared helpers for WASM API operations
//!
//! Common patterns for serialization, error handling, validation and
//! console logging across the API functions.

use serde::Serialize;
use wasm_bindgen::JsValue;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(&format!("[WASM] {}", msg)));
}

pub fn log_info(msg: &str) {
    web_sys::console::info_1(&JsValue::from_str(&format!("[WASM] {}", msg)));
}

pub fn log_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!("[WASM] ❌ {}", msg)));
}

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Validate that the verse text is non-empty
pub fn validate_verse_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Invalid input. Expected non-empty verse text".to_string());
    }
    Ok(())
}

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_verse_text() {
        assert!(validate_verse_text("אב").is_ok());
        assert!(validate_verse_text("").is_err());
        assert!(validate_verse_text("   ").is_err());
    }
}
