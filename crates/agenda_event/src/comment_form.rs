use agenda::{EventId, NewComment};
use agenda_ui::{colors, form_button, inline_flash_error};
use egui::RichText;

pub const SUBMIT_ERROR: &str = "Une erreur est survenue lors de l'envoi du commentaire";

pub enum CommentFormAction {
    Submit(NewComment),
}

/// State of the "leave a comment" form under the comment list.
#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub author: String,
    pub content: String,
    submitting: bool,
    error: Option<String>,
}

impl CommentForm {
    /// Both fields must hold something other than whitespace.
    pub fn is_valid(&self) -> bool {
        !self.author.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn to_new_comment(&self, event_id: &EventId) -> Option<NewComment> {
        if !self.is_valid() {
            return None;
        }

        Some(NewComment {
            event_id: event_id.clone(),
            author: self.author.trim().to_owned(),
            content: self.content.trim().to_owned(),
        })
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    /// The comment went through: clear the text, keep the author.
    pub fn submitted(&mut self) {
        self.submitting = false;
        self.content.clear();
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, event_id: &EventId) -> Option<CommentFormAction> {
        let mut action = None;

        ui.vertical(|ui| {
            ui.add_space(12.0);
            ui.label(RichText::new("Laisser un avis").strong());

            ui.add(
                egui::TextEdit::singleline(&mut self.author)
                    .hint_text("Votre nom")
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                egui::TextEdit::multiline(&mut self.content)
                    .hint_text("Votre commentaire")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );

            if let Some(err) = &self.error {
                ui.add(inline_flash_error(err));
            }

            let enabled = self.is_valid() && !self.submitting;
            let label = if self.submitting {
                "Envoi..."
            } else {
                "Envoyer"
            };

            if ui
                .add(form_button(label, colors::ACCENT, enabled))
                .clicked()
                && enabled
            {
                action = self.to_new_comment(event_id).map(CommentFormAction::Submit);
            }
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn form_validation() {
        let mut form = CommentForm::default();
        assert!(!form.is_valid());

        form.author = "Léa".to_string();
        assert!(!form.is_valid()); // still no content

        form.content = "   ".to_string();
        assert!(!form.is_valid());

        form.content = "Super".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn new_comment_is_trimmed() {
        let form = CommentForm {
            author: " Léa ".to_string(),
            content: "\nSuper soirée ".to_string(),
            ..Default::default()
        };

        assert_eq!(
            form.to_new_comment(&EventId::new("9")),
            Some(NewComment {
                event_id: EventId::new("9"),
                author: "Léa".to_string(),
                content: "Super soirée".to_string(),
            })
        );
    }

    #[test]
    fn submit_lifecycle() {
        let mut form = CommentForm {
            author: "Léa".to_string(),
            content: "Super".to_string(),
            ..Default::default()
        };

        form.begin_submit();
        assert!(form.is_submitting());

        form.failed(SUBMIT_ERROR);
        assert!(!form.is_submitting());
        assert_eq!(form.error(), Some(SUBMIT_ERROR));
        assert_eq!(form.content, "Super");

        form.begin_submit();
        assert_eq!(form.error(), None);
        form.submitted();
        assert_eq!(form.content, "");
        assert_eq!(form.author, "Léa");
    }

    #[test]
    fn draws_without_emitting_when_idle() {
        let ctx = egui::Context::default();
        let id = EventId::new("9");
        let mut form = CommentForm::default();

        let draw = |form: &mut CommentForm| {
            let mut action = None;
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| action = form.ui(ui, &id));
            });
            action
        };

        // empty form, disabled button
        assert!(draw(&mut form).is_none());

        form.author = "Léa".to_string();
        form.content = "Super".to_string();
        form.begin_submit();
        assert!(draw(&mut form).is_none());

        form.failed(SUBMIT_ERROR);
        assert!(draw(&mut form).is_none());
    }
}
