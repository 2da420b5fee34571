pub const PRESET_DEFAULT: &str = r#"# raiz configuration

[cpf]
# "strict" runs the full check-digit algorithm.
# "length_only" accepts any 11 digits; keep it out of production.
strictness = "strict"

[output]
color = true
redact = false
redact_visible_digits = 2

# Select with `--profile dev`.
[profiles.dev.cpf]
strictness = "length_only"

[profiles.ci.output]
color = false
redact = true
"#;
