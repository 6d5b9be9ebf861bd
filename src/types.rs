/// Hierarchical key identifying one translatable field.
/// Example: `//ldml/localeDisplayNames/languages/language[@type="de"]`
pub type Xpath = String;
/// Locale identifier as used by the locale-data store.
/// Examples: `de`, `de_CH`, `sr_Latn`, `root`
pub type LocaleId = String;
/// Identifier of a voting user.
/// Examples: `1`, `admin@example.org`
pub type UserId = String;
/// Wire-safe row key handed to clients.
/// Example: `_xLy9sZG1sL2xvY2FsZURpc3BsYXlOYW1lcw`
pub type FieldHash = String;
/// Wire-safe candidate value key.
/// Example: `TW9udGFn`
pub type ValueHash = String;
/// Named logical page identifier.
/// Examples: `Languages_A_D`, `NAmerica`
pub type PageId = String;
/// Short display code of a path, used by code sorting.
/// Examples: `de`, `Africa_Central-long-generic`
pub type PathCode = String;
/// Provenance tag recorded when an item is added.
/// Examples: `inherited`, `votes`, `winning`, `baseline`, `our`
pub type ProvenanceTag = &'static str;
