use serde::{Deserialize, Serialize};

/// Macro to generate a snake_case enum with an `as_str` accessor
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(MessageRole {
    User => "user",
    Assistant => "assistant",
});

str_enum!(FieldCategory {
    Causes => "causes",
    Symptoms => "symptoms",
    Precautions => "precautions",
    Medications => "medications",
    HomeRemedies => "home_remedies",
    Facts => "facts",
});

impl FieldCategory {
    /// Every card section, in display order.
    pub const ALL: [FieldCategory; 6] = [
        FieldCategory::Causes,
        FieldCategory::Symptoms,
        FieldCategory::Precautions,
        FieldCategory::Medications,
        FieldCategory::HomeRemedies,
        FieldCategory::Facts,
    ];
}
