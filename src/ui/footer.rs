// src/ui/footer.rs
use eframe::egui;

pub fn show_footer(ui: &mut egui::Ui, repository_url: &str) {
    ui.add_space(48.0);
    ui.separator();
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.add(
            egui::Hyperlink::from_label_and_url("GitHub", repository_url)
                .open_in_new_tab(true)
        );
    });
    ui.add_space(16.0);
}
