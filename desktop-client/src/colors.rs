use eframe::egui;

pub const BOARD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(26, 94, 99);
pub const MARKS: egui::Color32 = egui::Color32::from_rgb(254, 254, 227);
pub const STRIKE_OUT: egui::Color32 = egui::Color32::from_rgb(0, 191, 178);

pub fn hover_fill() -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(254, 254, 227, 40)
}
