/// Declare the plugin type and export every C entry point the host looks up.
///
/// Expands to a static [`PluginSlot`](crate::PluginSlot), an `install_host`
/// function the binding layer calls before the host calls `ts3plugin_init`,
/// a `plugin_instance` accessor, and the `ts3plugin_*` exports. Every export
/// is wrapped in a panic guard. Buffers written to out-parameters are
/// host-owned and come back through `ts3plugin_freeMemory`.
#[macro_export]
macro_rules! declare_plugin {
    ($plugin:ty) => {
        static PLUGIN_SLOT: $crate::PluginSlot<$plugin> = $crate::PluginSlot::new();

        /// Hand the host's functions to the plugin. Must precede `ts3plugin_init`.
        pub fn install_host(host: ::std::sync::Arc<dyn $crate::HostFunctions>) {
            PLUGIN_SLOT.install_host(host);
        }

        /// The live plugin instance, if the host has loaded it.
        pub fn plugin_instance() -> ::std::option::Option<::std::sync::Arc<$plugin>> {
            PLUGIN_SLOT.instance()
        }

        #[no_mangle]
        pub extern "C" fn ts3plugin_name() -> *const ::std::os::raw::c_char {
            <$plugin as $crate::Plugin>::NAME.as_ptr()
        }

        #[no_mangle]
        pub extern "C" fn ts3plugin_version() -> *const ::std::os::raw::c_char {
            <$plugin as $crate::Plugin>::VERSION.as_ptr()
        }

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn ts3plugin_apiVersion() -> ::std::os::raw::c_int {
            <$plugin as $crate::Plugin>::API_VERSION
        }

        #[no_mangle]
        pub extern "C" fn ts3plugin_author() -> *const ::std::os::raw::c_char {
            <$plugin as $crate::Plugin>::AUTHOR.as_ptr()
        }

        #[no_mangle]
        pub extern "C" fn ts3plugin_description() -> *const ::std::os::raw::c_char {
            <$plugin as $crate::Plugin>::DESCRIPTION.as_ptr()
        }

        /// Returns 0 on success; anything else makes the host unload us.
        #[no_mangle]
        pub extern "C" fn ts3plugin_init() -> ::std::os::raw::c_int {
            $crate::ffi_guard::guard_with_default("ts3plugin_init", 1, || {
                match PLUGIN_SLOT.init() {
                    Ok(()) => 0,
                    Err(e) => {
                        eprintln!(
                            "[{}] failed to load: {}",
                            <$plugin as $crate::Plugin>::NAME.to_string_lossy(),
                            e
                        );
                        1
                    }
                }
            })
        }

        #[no_mangle]
        pub extern "C" fn ts3plugin_shutdown() {
            $crate::ffi_guard::guard_void("ts3plugin_shutdown", || PLUGIN_SLOT.shutdown());
        }

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn ts3plugin_registerPluginID(id: *const ::std::os::raw::c_char) {
            $crate::ffi_guard::guard_void("ts3plugin_registerPluginID", || {
                // SAFETY: the host passes null or a NUL-terminated id valid for this call.
                if let Some(id) = unsafe { $crate::memory::string_from_host(id) } {
                    PLUGIN_SLOT.register_plugin_id(&id);
                }
            });
        }

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn ts3plugin_freeMemory(data: *mut ::std::ffi::c_void) {
            // SAFETY: the host only returns buffers this plugin handed out.
            unsafe { $crate::memory::free_host_memory(data) }
        }

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn ts3plugin_infoTitle() -> *const ::std::os::raw::c_char {
            match <$plugin as $crate::Plugin>::INFO_TITLE {
                Some(title) => title.as_ptr(),
                None => ::std::ptr::null(),
            }
        }

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn ts3plugin_infoData(
            connection: u64,
            id: u64,
            kind: ::std::os::raw::c_int,
            data: *mut *mut ::std::os::raw::c_char,
        ) {
            $crate::ffi_guard::guard_void("ts3plugin_infoData", || {
                if data.is_null() {
                    return;
                }
                let text = <$crate::PluginItemType as ::std::convert::TryFrom<::std::os::raw::c_int>>::try_from(kind)
                    .ok()
                    .and_then(|kind| {
                        PLUGIN_SLOT
                            .with_instance(|plugin, ctx| $crate::Plugin::info_data(plugin, ctx, connection, id, kind))
                            .flatten()
                    });
                let buffer = match text {
                    Some(text) => $crate::memory::alloc_host_string(&text, $crate::definitions::INFODATA_BUFSIZE),
                    None => ::std::ptr::null_mut(),
                };
                // SAFETY: checked non-null above; the host owns the written buffer.
                unsafe { *data = buffer };
            });
        }

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn ts3plugin_initMenus(
            menu_items: *mut *mut *mut $crate::PluginMenuItem,
            menu_icon: *mut *mut ::std::os::raw::c_char,
        ) {
            $crate::ffi_guard::guard_void("ts3plugin_initMenus", || {
                let Some(menus) = PLUGIN_SLOT.with_instance(|plugin, _| $crate::Plugin::menus(plugin)) else {
                    return;
                };
                if !menu_items.is_null() {
                    // SAFETY: non-null out-parameter supplied by the host.
                    unsafe { *menu_items = $crate::menu::alloc_menu_items(&menus.items) };
                }
                if !menu_icon.is_null() {
                    let icon = match menus.icon.as_deref() {
                        Some(icon) => $crate::menu::alloc_menu_icon(icon),
                        None => ::std::ptr::null_mut(),
                    };
                    // SAFETY: non-null out-parameter supplied by the host.
                    unsafe { *menu_icon = icon };
                }
                PLUGIN_SLOT.with_instance(|plugin, ctx| $crate::Plugin::menus_registered(plugin, ctx));
            });
        }

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn ts3plugin_onMenuItemEvent(
            connection: u64,
            kind: ::std::os::raw::c_int,
            menu_item_id: ::std::os::raw::c_int,
            selected_item_id: u64,
        ) {
            $crate::ffi_guard::guard_void("ts3plugin_onMenuItemEvent", || {
                let Ok(kind) = <$crate::PluginMenuType as ::std::convert::TryFrom<::std::os::raw::c_int>>::try_from(kind) else {
                    return;
                };
                let event = $crate::MenuEvent {
                    connection,
                    kind,
                    menu_item_id,
                    selected_item_id,
                };
                PLUGIN_SLOT.with_instance(|plugin, ctx| $crate::Plugin::on_menu_item_event(plugin, ctx, event));
            });
        }
    };
}
