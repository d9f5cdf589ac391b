//! `{placeholder}` expansion for authored copy.
//!
//! Strings in `pages.yaml`, `copy.yaml` and `footer.yaml` refer to the site
//! name through placeholders so a rebrand only touches `site.yaml`.

/// Alt text used for the site logo when the brand name is empty.
pub const FALLBACK_SITE_ALT: &str = "Official Website";

/// Values available to authored strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    /// `{name}`
    pub name: String,
    /// `{site_alt}`
    pub site_alt: String,
}

impl TemplateVars {
    #[must_use]
    pub fn for_site_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            site_alt: footer_alt(name).to_string(),
        }
    }

    /// Expand known placeholders; anything else between braces is kept verbatim.
    #[must_use]
    pub fn render(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start..];
            let Some(end) = after.find('}') else {
                out.push_str(after);
                return out;
            };
            match &after[1..end] {
                "name" => out.push_str(&self.name),
                "site_alt" => out.push_str(&self.site_alt),
                _ => out.push_str(&after[..=end]),
            }
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        out
    }

    pub fn render_in_place(&self, s: &mut String) {
        if s.contains('{') {
            *s = self.render(s);
        }
    }
}

#[must_use]
pub fn footer_alt(name: &str) -> &str {
    if name.is_empty() {
        FALLBACK_SITE_ALT
    } else {
        name
    }
}

/// Authored data whose strings may carry placeholders.
pub trait Expand {
    fn expand(&mut self, vars: &TemplateVars);
}

impl Expand for String {
    fn expand(&mut self, vars: &TemplateVars) {
        vars.render_in_place(self);
    }
}

impl<T: Expand> Expand for Vec<T> {
    fn expand(&mut self, vars: &TemplateVars) {
        for item in self {
            item.expand(vars);
        }
    }
}

impl<T: Expand> Expand for Option<T> {
    fn expand(&mut self, vars: &TemplateVars) {
        if let Some(inner) = self {
            inner.expand(vars);
        }
    }
}
