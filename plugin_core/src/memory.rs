//! Buffers whose ownership passes to the host.
//!
//! Everything a plugin hands back through an out-parameter (info text, menu
//! arrays, menu icons) is allocated with the C allocator. The host owns such a
//! buffer from the moment the export returns and gives it back through the
//! plugin's `freeMemory` export, which calls [`free_host_memory`]. The plugin
//! must not touch the buffer after handing it over. Inside the plugin, owned
//! Rust values are used instead.

use std::ffi::{c_void, CStr};
use std::os::raw::c_char;
use std::ptr;

/// Length of the longest prefix of `text` that fits in `capacity` bytes
/// including a terminating NUL, cut at a char boundary and at the first
/// interior NUL.
pub fn truncated_len(text: &str, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    let text = match text.find('\0') {
        Some(nul) => &text[..nul],
        None => text,
    };
    let mut end = text.len().min(capacity - 1);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Copy `text` into a fixed C buffer, truncating and always NUL-terminating.
pub fn copy_to_c_buffer(dst: &mut [c_char], text: &str) {
    let len = truncated_len(text, dst.len());
    for (slot, byte) in dst.iter_mut().zip(text.as_bytes()[..len].iter()) {
        *slot = *byte as c_char;
    }
    if let Some(terminator) = dst.get_mut(len) {
        *terminator = 0;
    }
}

/// Allocate a NUL-terminated copy of `text` for the host, truncated to fit a
/// `capacity`-byte buffer. Returns null if the allocation fails.
pub fn alloc_host_string(text: &str, capacity: usize) -> *mut c_char {
    let len = truncated_len(text, capacity);
    // SAFETY: malloc with a non-zero size; the result is checked before use
    // and exactly `len + 1` bytes are written.
    unsafe {
        let buffer = libc::malloc(len + 1) as *mut c_char;
        if buffer.is_null() {
            return ptr::null_mut();
        }
        ptr::copy_nonoverlapping(text.as_ptr() as *const c_char, buffer, len);
        *buffer.add(len) = 0;
        buffer
    }
}

/// Allocate uninitialized storage for `count` values of `T` with the C
/// allocator. Returns null if the allocation fails.
pub fn alloc_host_array<T>(count: usize) -> *mut T {
    let Some(size) = std::mem::size_of::<T>().checked_mul(count.max(1)) else {
        return ptr::null_mut();
    };
    // SAFETY: plain allocation; callers initialize before handing it over.
    unsafe { libc::malloc(size) as *mut T }
}

/// Release a buffer previously handed to the host. Null is ignored.
///
/// # Safety
/// `data` must be null or a pointer returned by one of the allocators in this
/// module that has not been freed yet.
pub unsafe fn free_host_memory(data: *mut c_void) {
    if !data.is_null() {
        libc::free(data);
    }
}

/// Copy a NUL-terminated string coming from the host.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that stays valid for
/// the duration of the call.
pub unsafe fn string_from_host(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(str::to_string)
}
