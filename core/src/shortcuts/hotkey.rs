/// Text used whenever the hotkey value does not map to a single modifier and a known key
pub(crate) const NO_HOTKEY: &str = "no hotkey assigned";

/**
 * Render the `Shortcut` header `HotKey` field.
 * The low byte is the key and the high byte is the modifier. Only a single modifier (SHIFT, CTRL, or ALT) is
 * recognized, anything else is treated as no hotkey
 */
pub fn hotkey_string(hotkey: u16) -> String {
    let [key, modifier] = hotkey.to_le_bytes();

    let modifier_name = match modifier {
        0x01 => "SHIFT",
        0x02 => "CTRL",
        0x04 => "ALT",
        _ => return NO_HOTKEY.to_string(),
    };

    let function_start = 0x70;
    let key_name = match key {
        0x30..=0x5a => char::from(key).to_string(),
        0x70..=0x87 => format!("F{}", key - function_start + 1),
        0x90 => String::from("NUM LOCK"),
        0x91 => String::from("SCROLL LOCK"),
        _ => return NO_HOTKEY.to_string(),
    };

    format!("{modifier_name}+{key_name}")
}
