use std::os::raw::{c_char, c_int};
use std::ptr;

use crate::definitions::{PluginMenuType, PLUGIN_MENU_BUFSZ};
use crate::memory::{alloc_host_array, alloc_host_string, copy_to_c_buffer, free_host_memory};

/// One menu entry as the host reads it.
///
/// Returned from `initMenus` inside a NULL-terminated array. Both the array
/// and every record are host-owned once returned and are released one by one
/// through the plugin's `freeMemory` export.
#[repr(C)]
pub struct PluginMenuItem {
    pub kind: c_int,
    pub id: c_int,
    pub text: [c_char; PLUGIN_MENU_BUFSZ],
    pub icon: [c_char; PLUGIN_MENU_BUFSZ],
}

/// A menu entry as plugins describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub kind: PluginMenuType,
    pub id: i32,
    pub text: String,
    pub icon: String,
}

impl MenuItem {
    pub fn global(id: i32, text: &str, icon: &str) -> Self {
        MenuItem {
            kind: PluginMenuType::Global,
            id,
            text: text.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Everything a plugin registers with the host's menu bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginMenus {
    pub items: Vec<MenuItem>,
    /// Icon shown next to the plugin's submenu.
    pub icon: Option<String>,
}

/// Build the host-owned, NULL-terminated menu array.
///
/// Returns null if any allocation fails; partial allocations are released
/// before returning.
pub fn alloc_menu_items(items: &[MenuItem]) -> *mut *mut PluginMenuItem {
    let array = alloc_host_array::<*mut PluginMenuItem>(items.len() + 1);
    if array.is_null() {
        return ptr::null_mut();
    }

    for (index, item) in items.iter().enumerate() {
        let record = alloc_host_array::<PluginMenuItem>(1);
        if record.is_null() {
            // SAFETY: entries 0..index were written below and are live.
            unsafe { free_menu_items(array, index) };
            return ptr::null_mut();
        }
        // SAFETY: `record` is a fresh allocation large enough for one item,
        // and `array` has room for items.len() + 1 pointers.
        unsafe {
            ptr::write(
                record,
                PluginMenuItem {
                    kind: item.kind as c_int,
                    id: item.id,
                    text: [0; PLUGIN_MENU_BUFSZ],
                    icon: [0; PLUGIN_MENU_BUFSZ],
                },
            );
            copy_to_c_buffer(&mut (*record).text, &item.text);
            copy_to_c_buffer(&mut (*record).icon, &item.icon);
            *array.add(index) = record;
        }
    }

    // SAFETY: slot items.len() is the last one allocated.
    unsafe { *array.add(items.len()) = ptr::null_mut() };
    array
}

/// Host-owned copy of the plugin menu icon name.
pub fn alloc_menu_icon(icon: &str) -> *mut c_char {
    alloc_host_string(icon, PLUGIN_MENU_BUFSZ)
}

/// Release the first `count` records and the array itself.
///
/// # Safety
/// `array` must come from [`alloc_menu_items`] and its first `count` entries
/// must be live.
unsafe fn free_menu_items(array: *mut *mut PluginMenuItem, count: usize) {
    for index in 0..count {
        free_host_memory(*array.add(index) as *mut _);
    }
    free_host_memory(array as *mut _);
}
