use crate::core::form::RecordListForm;
use crate::domain::model::{Field, FieldState};
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use std::io::Write;

/// Plain-text rendering: one input group per entry, error text under
/// fields that were touched and are invalid.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, form: &RecordListForm) -> Result<()> {
        let status = if form.is_valid() { "valid" } else { "invalid" };
        writeln!(self.out, "userinfo ({} entries, {})", form.len(), status)?;

        for (index, entry) in form.entries().enumerate() {
            writeln!(self.out, "#{}", index + 1)?;
            for field in Field::ALL {
                writeln!(self.out, "  {:<6} [{}]", field.as_str(), entry.get(field))?;
                if form.field_state(index, field)? == FieldState::TouchedInvalid {
                    for violation in form.field_errors(index, field)? {
                        writeln!(self.out, "    ! {}", violation.message(field))?;
                    }
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

/// Discards output; used when only the session report matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _form: &RecordListForm) -> Result<()> {
        Ok(())
    }
}
