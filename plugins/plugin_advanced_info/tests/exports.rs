mod common;

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::ptr;

use common::{HostCall, LoadedPlugin, RecordingHost, PLUGIN_ID};
use plugin_advanced_info::toggle::ToggleState;
use plugin_advanced_info::*;
use plugin_core::{ConnectStatus, PluginMenuItem};

const GLOBAL: c_int = 0;
const CHANNEL: c_int = 1;
const ENABLE: c_int = 1;
const DISABLE: c_int = 2;

const ENABLED_MSG: &str = "[color=black]<[b]Advanced Information[/b]> The [color=#00aaff]Plugin[/color] has been [color=green]enabled[/color]";
const ALREADY_ENABLED_MSG: &str = "[color=black]<[b]Advanced Information[/b]> The [color=red]Plugin[/color] is already enabled";
const DISABLED_MSG: &str = "[color=black]<[b]Advanced Information[/b]> The [color=#00aaff]Plugin[/color] has been [color=red]disabled[/color]";
const ALREADY_DISABLED_MSG: &str = "[color=black]<[b]Advanced Information[/b]> The [color=red]Plugin[/color] is already disabled";

fn state() -> ToggleState {
    plugin_instance().expect("plugin loaded").toggle().state()
}

fn text(ptr: *const c_char) -> String {
    assert!(!ptr.is_null());
    unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string()
}

fn info_data(connection: u64, id: u64, kind: c_int) -> Option<String> {
    let mut data: *mut c_char = ptr::null_mut();
    ts3plugin_infoData(connection, id, kind, &mut data);
    if data.is_null() {
        return None;
    }
    let result = text(data);
    ts3plugin_freeMemory(data.cast());
    Some(result)
}

#[test]
fn metadata_exports() {
    assert_eq!(text(ts3plugin_name()), "Advanced Information");
    assert_eq!(text(ts3plugin_version()), "1.0");
    assert_eq!(ts3plugin_apiVersion(), 26);
    assert_eq!(text(ts3plugin_author()), "EricZones");
    assert_eq!(
        text(ts3plugin_description()),
        "Extends the visible data in info frames with useful information\nIncluding server frames, channel frames and client frames"
    );
    assert_eq!(text(ts3plugin_infoTitle()), "Advanced Information");
}

#[test]
fn load_starts_disabled() {
    let plugin = LoadedPlugin::load(RecordingHost::default());
    assert_eq!(state(), ToggleState::Disabled);
    assert!(plugin.host.calls().is_empty());
}

#[test]
fn enable_from_menu() {
    let plugin = LoadedPlugin::load(RecordingHost::default());

    ts3plugin_onMenuItemEvent(1, GLOBAL, ENABLE, 0);

    assert_eq!(state(), ToggleState::Enabled);
    assert_eq!(
        plugin.host.calls(),
        vec![
            HostCall::MenuEnabled { plugin_id: PLUGIN_ID.into(), menu_id: 1, enabled: false },
            HostCall::MenuEnabled { plugin_id: PLUGIN_ID.into(), menu_id: 2, enabled: true },
            HostCall::TabMessage(ENABLED_MSG.into()),
        ]
    );
}

#[test]
fn enable_twice_reports_already_enabled() {
    let plugin = LoadedPlugin::load(RecordingHost::default());

    ts3plugin_onMenuItemEvent(1, GLOBAL, ENABLE, 0);
    plugin.host.clear();
    ts3plugin_onMenuItemEvent(1, GLOBAL, ENABLE, 0);

    assert_eq!(state(), ToggleState::Enabled);
    assert_eq!(plugin.host.calls(), vec![HostCall::TabMessage(ALREADY_ENABLED_MSG.into())]);
}

#[test]
fn disable_when_disabled_reports_already_disabled() {
    let plugin = LoadedPlugin::load(RecordingHost::default());

    ts3plugin_onMenuItemEvent(1, GLOBAL, DISABLE, 0);

    assert_eq!(state(), ToggleState::Disabled);
    assert_eq!(plugin.host.calls(), vec![HostCall::TabMessage(ALREADY_DISABLED_MSG.into())]);
}

#[test]
fn enable_then_disable_while_connected() {
    let mut host = RecordingHost::default();
    host.own_id = 12;
    *host.status.lock().unwrap() = ConnectStatus::ConnectionEstablished;
    let plugin = LoadedPlugin::load(host);

    ts3plugin_onMenuItemEvent(4, GLOBAL, ENABLE, 0);
    ts3plugin_onMenuItemEvent(4, GLOBAL, DISABLE, 0);

    assert_eq!(state(), ToggleState::Disabled);
    assert_eq!(plugin.host.menu_calls(), vec![(1, false), (2, true), (2, false), (1, true)]);
    assert_eq!(
        plugin.host.calls().last(),
        Some(&HostCall::PrivateMessage {
            connection: 4,
            target: 12,
            message: DISABLED_MSG.into(),
        })
    );
}

#[test]
fn unknown_menu_events_are_ignored() {
    let plugin = LoadedPlugin::load(RecordingHost::default());

    ts3plugin_onMenuItemEvent(1, GLOBAL, 9, 0);
    ts3plugin_onMenuItemEvent(1, CHANNEL, ENABLE, 5);
    ts3plugin_onMenuItemEvent(1, 42, ENABLE, 0);

    assert_eq!(state(), ToggleState::Disabled);
    assert!(plugin.host.calls().is_empty());
}

#[test]
fn menus_are_registered_with_load_enablement() {
    let plugin = LoadedPlugin::load(RecordingHost::default());

    let mut items: *mut *mut PluginMenuItem = ptr::null_mut();
    let mut icon: *mut c_char = ptr::null_mut();
    ts3plugin_initMenus(&mut items, &mut icon);

    assert!(!items.is_null());
    let mut registered = Vec::new();
    unsafe {
        let mut index = 0;
        while !(*items.add(index)).is_null() {
            let item = *items.add(index);
            registered.push(((*item).kind, (*item).id, text((*item).text.as_ptr()), text((*item).icon.as_ptr())));
            ts3plugin_freeMemory(item.cast());
            index += 1;
        }
    }
    ts3plugin_freeMemory(items.cast());
    assert_eq!(
        registered,
        vec![
            (GLOBAL, 1, "Enable Plugin".to_string(), "enable.png".to_string()),
            (GLOBAL, 2, "Disable Plugin".to_string(), "disable.png".to_string()),
        ]
    );

    assert_eq!(text(icon), "plugin.png");
    ts3plugin_freeMemory(icon.cast());

    assert_eq!(plugin.host.menu_calls(), vec![(2, false), (1, true)]);
}

#[test]
fn info_frames() {
    let mut host = RecordingHost::default();
    host.server_vars.insert("id", "3".into());
    host.server_vars.insert("queries", "1".into());
    host.unique_ids.insert(8, "xyz+abc=".into());
    let _plugin = LoadedPlugin::load(host);

    assert_eq!(
        info_data(1, 0, 0).as_deref(),
        Some("\n[b]VirtualserverID:[/b] 3\n\n[b]Queries:[/b] 1")
    );
    assert_eq!(info_data(1, 15, 1).as_deref(), Some("\n[b]ChannelID:[/b] 15"));
    assert_eq!(
        info_data(1, 8, 2).as_deref(),
        Some("\n[b]ClientID:[/b] 8\n\n[b]UniqueID:[/b] xyz+abc=")
    );
    assert_eq!(info_data(1, 9, 2), None);
    assert_eq!(info_data(1, 8, 3), None);
}

#[test]
fn info_frames_do_not_depend_on_toggle() {
    let _plugin = LoadedPlugin::load(RecordingHost::default());
    assert_eq!(state(), ToggleState::Disabled);
    assert_eq!(info_data(1, 2, 1).as_deref(), Some("\n[b]ChannelID:[/b] 2"));
}

#[test]
fn long_info_text_is_truncated() {
    let mut host = RecordingHost::default();
    host.unique_ids.insert(1, "u".repeat(300));
    let _plugin = LoadedPlugin::load(host);

    let data = info_data(1, 1, 2).unwrap();
    assert_eq!(data.len(), 127);
    assert!(data.starts_with("\n[b]ClientID:[/b] 1"));
}

#[test]
fn callbacks_after_shutdown_are_ignored() {
    let plugin = LoadedPlugin::load(RecordingHost::default());
    plugin.unload();

    ts3plugin_onMenuItemEvent(1, GLOBAL, ENABLE, 0);
    assert!(plugin_instance().is_none());
    assert!(plugin.host.calls().is_empty());
    assert_eq!(info_data(1, 2, 1), None);
}

#[test]
fn free_memory_accepts_null() {
    ts3plugin_freeMemory(ptr::null_mut());
}

#[test]
fn messages_match_toggle_transitions() {
    let plugin = LoadedPlugin::load(RecordingHost::default());

    for menu in [DISABLE, ENABLE, ENABLE, DISABLE] {
        ts3plugin_onMenuItemEvent(1, GLOBAL, menu, 0);
    }

    assert_eq!(
        plugin.host.messages(),
        vec![ALREADY_DISABLED_MSG, ENABLED_MSG, ALREADY_ENABLED_MSG, DISABLED_MSG]
    );
}
