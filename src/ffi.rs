//! FFI bindings for Lexiscan
//!
//! C-compatible functions for calling the engine from host applications.
//! All functions exchange JSON as null-terminated C strings and return
//! allocated memory that must be freed with `lexiscan_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::encoder::ReportEncoder;
use crate::pipeline::behavioral_report;
use crate::quiz::{quiz_report, ChildInfo, QuizDefinition, QuizResponses};
use crate::types::BehavioralMetrics;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert a C string to a Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert a Rust string to a C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Build an encoded behavioral report payload from a metrics JSON document.
///
/// # Safety
/// - `metrics_json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `lexiscan_free_string`.
/// - Returns NULL on error; call `lexiscan_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn lexiscan_behavioral_report(
    metrics_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let raw = match cstr_to_string(metrics_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid metrics JSON string pointer");
            return ptr::null_mut();
        }
    };

    let metrics: BehavioralMetrics = match serde_json::from_str(&raw) {
        Ok(m) => m,
        Err(e) => {
            set_last_error(&e.to_string());
            return ptr::null_mut();
        }
    };

    let report = behavioral_report(&metrics);
    match ReportEncoder::new().encode_to_json(&report) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Build an encoded quiz report payload.
///
/// `definition_json` is the question definition document, `child_json` is a
/// `{"name": ..., "age": ...}` object, and `responses_json` maps question ids
/// to integer values.
///
/// # Safety
/// - All three arguments must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `lexiscan_free_string`.
/// - Returns NULL on error; call `lexiscan_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn lexiscan_quiz_report(
    definition_json: *const c_char,
    child_json: *const c_char,
    responses_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let definition_raw = match cstr_to_string(definition_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid definition JSON string pointer");
            return ptr::null_mut();
        }
    };

    let child_raw = match cstr_to_string(child_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid child JSON string pointer");
            return ptr::null_mut();
        }
    };

    let responses_raw = match cstr_to_string(responses_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid responses JSON string pointer");
            return ptr::null_mut();
        }
    };

    let definition = match QuizDefinition::from_json(&definition_raw) {
        Ok(d) => d,
        Err(e) => {
            set_last_error(&e.to_string());
            return ptr::null_mut();
        }
    };

    let child: ChildInfo = match serde_json::from_str(&child_raw) {
        Ok(c) => c,
        Err(e) => {
            set_last_error(&e.to_string());
            return ptr::null_mut();
        }
    };

    let responses: QuizResponses = match serde_json::from_str(&responses_raw) {
        Ok(r) => r,
        Err(e) => {
            set_last_error(&e.to_string());
            return ptr::null_mut();
        }
    };

    let report = quiz_report(&definition, child, &responses);
    match ReportEncoder::new().encode_to_json(&report) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a string returned by Lexiscan functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a Lexiscan function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn lexiscan_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next Lexiscan call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn lexiscan_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Get the Lexiscan library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn lexiscan_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
