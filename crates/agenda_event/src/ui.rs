use agenda::{Artist, EventId};
use agenda_ui::{
    background_title, colors, constants, icons::heart_multiple_icon, inline_flash_error,
    page_header, pill, spinner,
};
use egui::{Color32, CornerRadius, Margin, RichText};

use crate::comment_form::{CommentForm, CommentFormAction};
use crate::layout::{
    CommentLayout, CommentsLayout, EventLayout, ScreenLayout, ARTISTS_TITLE, COMMENTS_TITLE,
    PRESENTATION_TITLE,
};

const BACKGROUND: Color32 = Color32::from_rgb(0xD9, 0xCF, 0xBF);

pub fn screen_ui(
    ui: &mut egui::Ui,
    layout: &ScreenLayout<'_>,
    form: &mut CommentForm,
    event_id: Option<&EventId>,
) -> Option<CommentFormAction> {
    let mut action = None;

    egui::Frame::new().fill(BACKGROUND).show(ui, |ui| {
        ui.set_min_size(ui.available_size());

        egui::Frame::new()
            .inner_margin(Margin {
                left: 20,
                right: 20,
                top: 50,
                bottom: 0,
            })
            .show(ui, |ui| {
                page_header(ui);
            });

        egui::ScrollArea::vertical()
            .id_salt("event-screen")
            .auto_shrink([false, false])
            .show(ui, |ui| match layout {
                ScreenLayout::Spinner => {
                    ui.add_space(constants::DETAIL_TOP_MARGIN);
                    ui.add(spinner(48.0));
                }
                ScreenLayout::Error(message) => {
                    ui.add_space(constants::DETAIL_TOP_MARGIN);
                    egui::Frame::new()
                        .inner_margin(Margin::symmetric(constants::DETAIL_PADDING, 0))
                        .show(ui, |ui| {
                            ui.add(inline_flash_error(message));
                        });
                }
                ScreenLayout::Detail(detail) => {
                    action = detail_ui(ui, detail, form, event_id);
                }
            });
    });

    action
}

fn detail_ui(
    ui: &mut egui::Ui,
    detail: &EventLayout<'_>,
    form: &mut CommentForm,
    event_id: Option<&EventId>,
) -> Option<CommentFormAction> {
    let mut action = None;

    ui.add_space(constants::DETAIL_TOP_MARGIN - constants::AVATAR_SIZE / 2.0);
    ui.vertical_centered(|ui| {
        ui.add(agenda_ui::avatar(detail.title, constants::AVATAR_SIZE));
    });

    egui::Frame::new()
        .fill(colors::detail_panel_fill(ui.visuals().dark_mode))
        .corner_radius(CornerRadius {
            nw: 30,
            ne: 30,
            sw: 0,
            se: 0,
        })
        .inner_margin(Margin::symmetric(constants::DETAIL_PADDING, 27))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.add(heart_multiple_icon(38.0, ui.visuals().text_color()));

            // header
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(RichText::new(detail.title).size(constants::TITLE_SIZE).strong());
                ui.add_space(15.0);
            });
            ui.horizontal_wrapped(|ui| {
                ui.add(pill(&detail.date));
                ui.add(pill(detail.category));
            });

            // presentation
            ui.add_space(60.0);
            ui.add(background_title(PRESENTATION_TITLE));
            ui.label(RichText::new(detail.description).size(constants::BODY_SIZE));
            ui.add_space(constants::SECTION_GAP);

            ui.add(background_title(ARTISTS_TITLE));
            artists_ui(ui, detail.artists);
            ui.add_space(constants::SECTION_GAP);

            ui.add(background_title(COMMENTS_TITLE));
            action = comments_ui(ui, &detail.comments, form, event_id);
            ui.add_space(30.0);
        });

    action
}

fn artists_ui(ui: &mut egui::Ui, artists: &[Artist]) {
    for artist in artists {
        ui.add_space(10.0);
        ui.label(RichText::new(&artist.name).strong());
        ui.label(RichText::new(&artist.description).size(constants::BODY_SIZE));
    }
}

fn comments_ui(
    ui: &mut egui::Ui,
    comments: &CommentsLayout<'_>,
    form: &mut CommentForm,
    event_id: Option<&EventId>,
) -> Option<CommentFormAction> {
    match comments {
        CommentsLayout::Loading => {
            ui.add(spinner(24.0));
            None
        }
        CommentsLayout::Error(message) => {
            ui.add(inline_flash_error(message));
            None
        }
        CommentsLayout::List(list) => {
            for comment in list {
                comment_ui(ui, comment);
            }

            // the form is only reachable with a valid route
            let event_id = event_id?;
            form.ui(ui, event_id)
        }
    }
}

fn comment_ui(ui: &mut egui::Ui, comment: &CommentLayout<'_>) {
    ui.add_space(8.0);
    ui.label(RichText::new(&comment.author_line).strong());
    ui.label(RichText::new(comment.content).size(constants::SMALL_SIZE));
    ui.label(
        RichText::new(&comment.date_line)
            .size(constants::TINY_SIZE)
            .weak(),
    );
}
