use serde::Deserialize;

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ShortcutToml {
    #[serde(default)]
    pub shortcuts: ShortcutOptions,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ShortcutOptions {
    /**Largest size any single section may declare. Defaults to the length of the data being parsed */
    pub max_section_size: Option<u64>,
}
