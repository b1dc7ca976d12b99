//! Template rendering with Tera

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", include_str!("../templates/base.html"))?;
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))?;
        tera.add_raw_template(
            "components/results.html",
            include_str!("../templates/components/results.html"),
        )?;

        Ok(Self { tera })
    }

    /// Render a template with any serializable context
    pub fn render(&self, template: &str, context: &impl Serialize) -> Result<String> {
        let ctx = Context::from_serialize(context)?;
        Ok(self.tera.render(template, &ctx)?)
    }
}
