//! C FFI: exposes [`TextPreprocessor`] to C, Swift and Kotlin callers.
//!
//! Functions are `#[no_mangle] extern "C"`; link against `libtweetnorm.a`.
//! A null text pointer yields a null result, mirroring `None` on the Rust
//! side.
//!
//! ## Memory contract
//!
//! | Function                         | Caller frees with           |
//! |----------------------------------|-----------------------------|
//! | [`tweetnorm_pipeline_new`]       | [`tweetnorm_pipeline_free`] |
//! | [`tweetnorm_pipeline_process`]   | [`tweetnorm_free_string`]   |
//! | [`tweetnorm_pipeline_stages`]    | [`tweetnorm_free_string`]   |

use std::ffi::{c_char, CStr, CString};

use tracing::error;

use crate::{
    input::RawInput,
    pipeline::{PreprocessorConfig, TextPreprocessor},
};

// ─────────────────────────────────────────────────────────────────────────────

/// Opaque handle to a built pipeline.
pub struct TweetnormHandle {
    pipeline: TextPreprocessor,
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Borrow the bytes behind a C string; `None` for null.
unsafe fn cstr_bytes<'a>(ptr: *const c_char) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

/// Heap-allocate an owned C string.  Returns null on interior nul bytes.
fn to_c_str(s: &str) -> *const c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => std::ptr::null(),
    }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Build a pipeline.
///
/// @param config_json  UTF-8 JSON pipeline configuration, or `NULL` for the
///                     default tweet pipeline.
/// @return             Opaque handle, or `NULL` when the configuration is
///                     invalid (details are logged).  Free with
///                     [`tweetnorm_pipeline_free`].
#[no_mangle]
pub unsafe extern "C" fn tweetnorm_pipeline_new(config_json: *const c_char) -> *mut TweetnormHandle {
    let pipeline = match unsafe { cstr_bytes(config_json) } {
        None => Ok(TextPreprocessor::new()),
        Some(bytes) => std::str::from_utf8(bytes)
            .map_err(|e| format!("config is not UTF-8: {e}"))
            .and_then(|json| PreprocessorConfig::from_json(json).map_err(|e| e.to_string()))
            .and_then(|config| TextPreprocessor::with_config(config).map_err(|e| e.to_string())),
    };

    match pipeline {
        Ok(pipeline) => Box::into_raw(Box::new(TweetnormHandle { pipeline })),
        Err(e) => {
            error!("tweetnorm_pipeline_new: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Normalize one text.
///
/// The bytes are decoded with the pipeline's configured encoding (`utf-8`
/// unless the configuration says otherwise).
///
/// @param handle  Handle from [`tweetnorm_pipeline_new`].
/// @param text    NUL-terminated text, may be `NULL`.
/// @return        Heap-allocated UTF-8 result, or `NULL` when `text` is
///                `NULL` or a stage rejected it.  Free with
///                [`tweetnorm_free_string`].
#[no_mangle]
pub unsafe extern "C" fn tweetnorm_pipeline_process(
    handle: *const TweetnormHandle,
    text: *const c_char,
) -> *const c_char {
    if handle.is_null() {
        error!("tweetnorm_pipeline_process: null handle");
        return std::ptr::null();
    }
    let Some(bytes) = (unsafe { cstr_bytes(text) }) else {
        return std::ptr::null();
    };
    let h = unsafe { &*handle };
    match h.pipeline.process_input(RawInput::Bytes(bytes)) {
        Some(out) => to_c_str(&out),
        None => std::ptr::null(),
    }
}

/// Return the pipeline's stage names as a JSON array, e.g.
/// `["remove_url","to_lower","to_strip"]`.
///
/// @return  Heap-allocated UTF-8 JSON, or `NULL` for a null handle.
///          Free with [`tweetnorm_free_string`].
#[no_mangle]
pub unsafe extern "C" fn tweetnorm_pipeline_stages(handle: *const TweetnormHandle) -> *const c_char {
    if handle.is_null() {
        return std::ptr::null();
    }
    let h = unsafe { &*handle };
    match serde_json::to_string(&h.pipeline.stage_names()) {
        Ok(json) => to_c_str(&json),
        Err(e) => {
            error!("tweetnorm_pipeline_stages: {e}");
            std::ptr::null()
        }
    }
}

/// Free a string returned by this library.
#[no_mangle]
pub unsafe extern "C" fn tweetnorm_free_string(s: *const c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s as *mut c_char) });
    }
}

/// Destroy a pipeline handle.
#[no_mangle]
pub unsafe extern "C" fn tweetnorm_pipeline_free(handle: *mut TweetnormHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take(ptr: *const c_char) -> Option<String> {
        if ptr.is_null() {
            return None;
        }
        let s = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
        unsafe { tweetnorm_free_string(ptr) };
        Some(s)
    }

    #[test]
    fn test_default_pipeline_round_trip() {
        unsafe {
            let handle = tweetnorm_pipeline_new(std::ptr::null());
            assert!(!handle.is_null());

            let text = CString::new("Hello @bob #tag   world").unwrap();
            let out = take(tweetnorm_pipeline_process(handle, text.as_ptr()));
            assert_eq!(out.as_deref(), Some("hello world"));

            assert_eq!(take(tweetnorm_pipeline_process(handle, std::ptr::null())), None);
            tweetnorm_pipeline_free(handle);
        }
    }

    #[test]
    fn test_configured_pipeline() {
        unsafe {
            let config = CString::new(r#"{"stages":["to_lower","to_strip"],"encoding":"latin1"}"#).unwrap();
            let handle = tweetnorm_pipeline_new(config.as_ptr());
            assert!(!handle.is_null());

            let stages = take(tweetnorm_pipeline_stages(handle));
            assert_eq!(stages.as_deref(), Some(r#"["to_lower","to_strip"]"#));

            let latin1 = CString::new(&b" CAF\xc9 "[..]).unwrap();
            let out = take(tweetnorm_pipeline_process(handle, latin1.as_ptr()));
            assert_eq!(out.as_deref(), Some("café"));
            tweetnorm_pipeline_free(handle);
        }
    }

    #[test]
    fn test_bad_config_is_null() {
        unsafe {
            let config = CString::new(r#"{"stages":["explode"]}"#).unwrap();
            assert!(tweetnorm_pipeline_new(config.as_ptr()).is_null());
        }
    }
}
