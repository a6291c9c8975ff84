use crate::core::form::RecordListForm;
use crate::utils::error::Result;

/// Binds to a form and presents it; one input group per entry.
pub trait Renderer {
    fn render(&mut self, form: &RecordListForm) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, form: &RecordListForm) -> Result<()> {
        (**self).render(form)
    }
}
