//! Fixed defaults shared by the CLI and the library

/// Line Inspector defaults
pub mod lines {
    /// Page source inspected when no path is given
    pub const DEFAULT_PATH: &str = "src/app/fillnda/page.tsx";

    /// First line of the default window (zero-based, inclusive)
    pub const DEFAULT_START: usize = 1069;

    /// End of the default window (zero-based, exclusive)
    pub const DEFAULT_END: usize = 1095;
}

/// Field Highlighter defaults
pub mod highlight {
    /// Template rewritten when no path is given
    pub const DEFAULT_PATH: &str = "templates/design_mutual_nda_v1";

    pub const WRAPPER_PREFIX: &str = r#"<span class="field">"#;
    pub const WRAPPER_SUFFIX: &str = "</span>";

    /// Field names of the built-in mapping, in application order
    pub const BUILTIN_FIELDS: [&str; 19] = [
        "doc_title",
        "effective_date_long",
        "party_1_name",
        "party_1_address",
        "party_1_phone",
        "party_1_emails_joined",
        "party_1_signatory_name",
        "party_1_signatory_title",
        "party_2_name",
        "party_2_address",
        "party_2_phone",
        "party_2_emails_joined",
        "party_2_signatory_name",
        "party_2_signatory_title",
        "information_scope_text",
        "purpose",
        "governing_law_full",
        "term_years_number",
        "term_years_words",
    ];

    pub const SUCCESS_MESSAGE: &str = "✅ Successfully highlighted all fillable fields in yellow";
}
