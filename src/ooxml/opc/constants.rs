/// Constant values related to the Open Packaging Convention.
///
/// This module contains the content type URIs (like MIME-types) that identify
/// the main parts this crate reads, and the relationship types used to find them.

/// Content type URIs (like MIME-types) that specify a part's format
pub mod content_type {
    // WordprocessingML content types
    pub const WML_DOCUMENT_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const WML_TEMPLATE_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml";
    pub const WML_DOCUMENT_MACRO_ENABLED_MAIN: &str =
        "application/vnd.ms-word.document.macroEnabled.main+xml";
    pub const WML_TEMPLATE_MACRO_ENABLED_MAIN: &str =
        "application/vnd.ms-word.template.macroEnabledTemplate.main+xml";

    // SpreadsheetML content types
    pub const SML_SHEET_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
    pub const SML_TEMPLATE_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.template.main+xml";
    pub const SML_SHEET_MACRO_ENABLED_MAIN: &str = "application/vnd.ms-excel.sheet.macroEnabled.main+xml";
    pub const SML_TEMPLATE_MACRO_ENABLED_MAIN: &str =
        "application/vnd.ms-excel.template.macroEnabled.main+xml";
    pub const SML_WORKSHEET: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
    pub const SML_SHARED_STRINGS: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml";
    pub const SML_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";

    // Generic XML, used for parts without a specific content type
    pub const XML: &str = "application/xml";

    /// Main-part content types accepted for Word documents.
    pub const WML_MAIN_PARTS: [&str; 4] = [
        WML_DOCUMENT_MAIN,
        WML_TEMPLATE_MAIN,
        WML_DOCUMENT_MACRO_ENABLED_MAIN,
        WML_TEMPLATE_MACRO_ENABLED_MAIN,
    ];

    /// Main-part content types accepted for Excel workbooks.
    pub const SML_MAIN_PARTS: [&str; 4] = [
        SML_SHEET_MAIN,
        SML_TEMPLATE_MAIN,
        SML_SHEET_MACRO_ENABLED_MAIN,
        SML_TEMPLATE_MACRO_ENABLED_MAIN,
    ];
}

/// Open XML relationship target modes
pub mod target_mode {
    pub const INTERNAL: &str = "Internal";
    pub const EXTERNAL: &str = "External";
}

/// Relationship type URIs
pub mod relationship_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    /// Strict Open XML variant of [`OFFICE_DOCUMENT`].
    pub const OFFICE_DOCUMENT_STRICT: &str =
        "http://purl.oclc.org/ooxml/officeDocument/relationships/officeDocument";
    pub const WORKSHEET: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
    pub const SHARED_STRINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
}
