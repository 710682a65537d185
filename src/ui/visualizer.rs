//! Controller preview drawn with the egui painter.
//!
//! Pressed buttons are filled with the accent color, mapped buttons get a highlight
//! ring. Indices follow the standard gamepad layout.

use eframe::egui::{self, vec2, Align2, FontId, Pos2, Sense, Stroke, Ui};

use super::common::{card_frame, UiColors};
use crate::controller::GamepadSnapshot;

/// Standard layout indices used by the preview
pub const DPAD_INDICES: [usize; 4] = [12, 13, 14, 15];
pub const LEFT_STICK: usize = 10;
pub const RIGHT_STICK: usize = 11;

/// How a single button is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonLook {
    pub pressed: bool,
    pub highlighted: bool,
}

impl ButtonLook {
    pub fn of(buttons: &[bool], highlights: &[usize], index: usize) -> Self {
        Self {
            pressed: buttons.get(index).copied().unwrap_or(false),
            highlighted: highlights.contains(&index),
        }
    }
}

/// Face button glyph in PlayStation notation
pub fn face_label(index: usize) -> &'static str {
    match index {
        0 => "×",
        1 => "○",
        2 => "□",
        3 => "△",
        _ => "",
    }
}

/// True when any D-pad direction is held
pub fn dpad_active(buttons: &[bool]) -> bool {
    DPAD_INDICES
        .iter()
        .any(|index| buttons.get(*index).copied().unwrap_or(false))
}

pub fn render(ui: &mut Ui, snapshot: &GamepadSnapshot, highlights: &[usize]) {
    let buttons = snapshot.buttons.as_slice();

    card_frame(UiColors::EXTREME_BG, UiColors::BORDER).show(ui, |ui| {
        let width = ui.available_width().min(460.0);
        let (response, painter) = ui.allocate_painter(vec2(width, width * 0.6), Sense::hover());
        let rect = response.rect;

        let left_x = rect.left() + rect.width() * 0.22;
        let right_x = rect.left() + rect.width() * 0.78;
        let mid_y = rect.top() + rect.height() * 0.55;
        let spacing = rect.height() * 0.16;
        let radius = rect.height() * 0.08;

        // Shoulder row: LB, LT on the left, RB, RT on the right
        let shoulder_y = rect.top() + rect.height() * 0.1;
        for (index, x, label) in [
            (4, left_x - spacing * 0.7, "L1"),
            (6, left_x + spacing * 0.7, "L2"),
            (5, right_x - spacing * 0.7, "R1"),
            (7, right_x + spacing * 0.7, "R2"),
        ] {
            draw_button(
                &painter,
                Pos2::new(x, shoulder_y),
                radius * 0.8,
                ButtonLook::of(buttons, highlights, index),
                label,
            );
        }

        // D-pad ring lights up for any direction
        let dpad_center = Pos2::new(left_x, mid_y - spacing);
        let dpad_color = if dpad_active(buttons) {
            UiColors::ACCENT
        } else {
            UiColors::BORDER
        };
        painter.circle(
            dpad_center,
            radius * 1.2,
            UiColors::INNER_BG,
            Stroke::new(2.0, dpad_color),
        );
        painter.text(
            dpad_center,
            Align2::CENTER_CENTER,
            "✚",
            FontId::proportional(radius),
            UiColors::MUTED,
        );

        draw_stick(
            &painter,
            Pos2::new(left_x, mid_y + spacing),
            radius * 1.5,
            ButtonLook::of(buttons, highlights, LEFT_STICK),
            snapshot.axes.first().zip(snapshot.axes.get(1)),
        );
        draw_stick(
            &painter,
            Pos2::new(right_x, mid_y + spacing),
            radius * 1.5,
            ButtonLook::of(buttons, highlights, RIGHT_STICK),
            snapshot.axes.get(2).zip(snapshot.axes.get(3)),
        );

        // Face buttons as a diamond: top 3, bottom 0, left 2, right 1
        let face_center = Pos2::new(right_x, mid_y - spacing);
        for (index, offset) in [
            (3, vec2(0.0, -spacing)),
            (0, vec2(0.0, spacing)),
            (2, vec2(-spacing, 0.0)),
            (1, vec2(spacing, 0.0)),
        ] {
            draw_button(
                &painter,
                face_center + offset,
                radius,
                ButtonLook::of(buttons, highlights, index),
                face_label(index),
            );
        }

        // Select, Start, Mode in the middle
        let center_x = rect.center().x;
        for (index, x, label) in [
            (8, center_x - spacing, "SEL"),
            (16, center_x, "RAY"),
            (9, center_x + spacing, "STA"),
        ] {
            draw_button(
                &painter,
                Pos2::new(x, mid_y - spacing),
                radius * 0.7,
                ButtonLook::of(buttons, highlights, index),
                label,
            );
        }
    });
}

fn draw_button(painter: &egui::Painter, center: Pos2, radius: f32, look: ButtonLook, label: &str) {
    let fill = if look.pressed {
        UiColors::ACCENT
    } else {
        UiColors::MAIN_BG
    };
    let stroke = if look.highlighted {
        Stroke::new(2.0, UiColors::HIGHLIGHT)
    } else {
        Stroke::new(1.0, UiColors::BORDER)
    };
    painter.circle(center, radius, fill, stroke);
    painter.text(
        center,
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(radius * 0.8),
        if look.pressed {
            egui::Color32::WHITE
        } else {
            UiColors::MUTED
        },
    );
}

fn draw_stick(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    look: ButtonLook,
    axes: Option<(&f32, &f32)>,
) {
    draw_button(painter, center, radius, look, "");
    if let Some((x, y)) = axes {
        let knob = center + vec2(*x, *y) * radius * 0.6;
        painter.circle_filled(knob, radius * 0.3, UiColors::MUTED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dpad_lights_for_any_direction() {
        let mut buttons = vec![false; 16];
        assert!(!dpad_active(&buttons));
        buttons[14] = true;
        assert!(dpad_active(&buttons));
    }

    #[test]
    fn dpad_is_dark_on_short_button_arrays() {
        assert!(!dpad_active(&[true; 12]));
    }

    #[test]
    fn button_look_combines_press_and_mapping() {
        let buttons = [true, false];
        let highlights = [1, 7];

        assert_eq!(
            ButtonLook::of(&buttons, &highlights, 0),
            ButtonLook {
                pressed: true,
                highlighted: false
            }
        );
        assert_eq!(
            ButtonLook::of(&buttons, &highlights, 7),
            ButtonLook {
                pressed: false,
                highlighted: true
            }
        );
    }

    #[test]
    fn only_face_buttons_have_glyphs() {
        assert_eq!(face_label(0), "×");
        assert_eq!(face_label(3), "△");
        assert_eq!(face_label(9), "");
    }
}
