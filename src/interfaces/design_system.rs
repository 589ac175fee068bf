use eframe::egui;

/// Dark theme with a chili-red accent
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(14, 12, 12);
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(20, 17, 17);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(30, 25, 25);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(24, 20, 20);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(229, 57, 53); // #E53935 (Chili)
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(255, 112, 67);

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 200, 83);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 23, 68);
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 171, 0);
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(41, 121, 255);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(245, 240, 240);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(170);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(110);

    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(60, 48, 48);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Colored message strip used for success / info / warning / error lines
    pub fn banner_frame(color: egui::Color32) -> egui::Frame {
        egui::Frame::NONE
            .fill(color.linear_multiply(0.15))
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.6)))
            .inner_margin(egui::Margin::symmetric(12, 10))
    }
}
