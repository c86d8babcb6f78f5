use serde::{Deserialize, Serialize};

/// How much of the container chain to render in front of a symbol name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
    /// Bare name
    NameOnly,
    /// Name qualified by enclosing types and namespaces
    NameAndContainers,
}

/// Which parts of each parameter to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterStyle {
    /// `this`, `ref`, `out`, `in`, `params`
    pub modifiers: bool,
    pub types: bool,
    pub names: bool,
    pub default_values: bool,
}

/// Verbosity profile for turning a symbol into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFormat {
    pub qualification: Qualification,

    /// Render `<T, U>` after generic names
    pub type_parameters: bool,

    /// Render `in`/`out` on type parameters
    pub variance: bool,

    /// Render a parameter list for callable members
    pub parameters: Option<ParameterStyle>,
}

impl DisplayFormat {
    /// Bare type name with type parameters
    pub const SHORT_TYPE: Self = Self {
        qualification: Qualification::NameOnly,
        type_parameters: true,
        variance: false,
        parameters: None,
    };

    /// Fully qualified type name with type parameters and variance
    pub const TYPE: Self = Self {
        qualification: Qualification::NameAndContainers,
        type_parameters: true,
        variance: true,
        parameters: None,
    };

    /// Bare member name with type parameters
    pub const SHORT_MEMBER: Self = Self {
        qualification: Qualification::NameOnly,
        type_parameters: true,
        variance: false,
        parameters: None,
    };

    /// Member name with type parameters and full parameter list
    pub const MEMBER: Self = Self {
        qualification: Qualification::NameOnly,
        type_parameters: true,
        variance: true,
        parameters: Some(ParameterStyle {
            modifiers: true,
            types: true,
            names: true,
            default_values: true,
        }),
    };
}

/// Display profiles used by the structure extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// `name` of types, delegates, enums and namespaces
    pub short_type_format: DisplayFormat,

    /// `displayName` of types, delegates, enums and namespaces
    pub type_format: DisplayFormat,

    /// `name` of methods, properties, fields and enum members
    pub short_member_format: DisplayFormat,

    /// `displayName` of methods, properties, fields and enum members
    pub member_format: DisplayFormat,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            short_type_format: DisplayFormat::SHORT_TYPE,
            type_format: DisplayFormat::TYPE,
            short_member_format: DisplayFormat::SHORT_MEMBER,
            member_format: DisplayFormat::MEMBER,
        }
    }
}

impl ExtractorConfig {
    /// Config that renders every display name without qualification or parameters
    pub fn names_only() -> Self {
        Self {
            type_format: DisplayFormat::SHORT_TYPE,
            member_format: DisplayFormat::SHORT_MEMBER,
            ..Default::default()
        }
    }
}
