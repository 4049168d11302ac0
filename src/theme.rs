use crate::types::Theme;

pub const PRIMARY: &str = "#2563eb";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                primary: PRIMARY,
                background: "#f7f9fc",
                card: "#ffffff",
                text: "#0f172a",
            },
            Theme::Dark => Self {
                primary: PRIMARY,
                background: "#0b1220",
                card: "#121a2a",
                text: "#e5e7eb",
            },
        }
    }

    /// Stylesheet for the whole page, driven by CSS custom properties.
    pub fn stylesheet(&self) -> String {
        format!(
            r#"
:root {{
  --primary: {primary};
  --bg: {bg};
  --card: {card};
  --text: {text};
}}
body {{ margin: 0; }}
.cc-app {{
  background: var(--bg);
  color: var(--text);
  min-height: 100vh;
  font-family: Arial, sans-serif;
}}
.cc-card {{
  background: var(--card);
  border-radius: 14px;
  padding: 1rem 1.25rem;
  box-shadow: 0 8px 24px rgba(2, 6, 23, 0.08);
  border: 1px solid rgba(2, 6, 23, 0.06);
}}
.cc-button {{
  background: var(--primary);
  color: white;
  border: none;
  border-radius: 12px;
  padding: 0.6rem 1rem;
  font-weight: 600;
  cursor: pointer;
  box-shadow: 0 6px 18px rgba(37, 99, 235, 0.35);
  transition: transform 0.06s ease, box-shadow 0.2s ease;
}}
.cc-button:hover {{
  transform: translateY(-1px);
  box-shadow: 0 10px 24px rgba(37, 99, 235, 0.45);
}}
.cc-secondary {{
  background: var(--card);
  color: var(--text);
  border: 1px solid rgba(2, 6, 23, 0.12);
  border-radius: 12px;
  padding: 0.5rem 0.75rem;
  cursor: pointer;
  font-weight: 600;
  box-shadow: 0 4px 12px rgba(2, 6, 23, 0.06);
}}
.cc-dropzone {{
  background: var(--card);
  border-radius: 12px;
  border: 1px dashed rgba(2, 6, 23, 0.18);
  padding: 0.75rem;
}}
textarea, input, select {{
  background: var(--card);
  color: var(--text);
  border-radius: 12px;
  border: 1px solid rgba(2, 6, 23, 0.1);
  box-shadow: 0 4px 12px rgba(2, 6, 23, 0.05);
  padding: 0.5em;
  box-sizing: border-box;
}}
pre, code {{ border-radius: 12px; }}
.cc-title {{ font-weight: 800; letter-spacing: -0.01em; }}
"#,
            primary = self.primary,
            bg = self.background,
            card = self.card,
            text = self.text,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_but_share_primary() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_eq!(light.primary, dark.primary);
        assert_eq!(light.background, "#f7f9fc");
        assert_eq!(dark.text, "#e5e7eb");
        assert_ne!(light.card, dark.card);
    }

    #[test]
    fn test_stylesheet_carries_palette() {
        let css = Palette::for_theme(Theme::Dark).stylesheet();
        assert!(css.contains("--bg: #0b1220;"));
        assert!(css.contains("--card: #121a2a;"));
        assert!(css.contains("--primary: #2563eb;"));
    }
}
