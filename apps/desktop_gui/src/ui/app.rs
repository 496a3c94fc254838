use std::time::{Duration, Instant};

use chrono::Utc;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use tracing::debug;

use crate::controller::events::UiEvent;
use shared::domain::{Student, StudentId, Theme, GRADE_LEVELS};
use ui_core::flash::{FlashQueue, FlashSeverity};
use ui_core::form::{
    parse_leading_int, FieldId, FieldKind, FieldSpec, FormController, SubmitOutcome,
};
use ui_core::prefs::PreferenceStore;
use ui_core::reveal::{CardId, RevealTracker, HIDDEN_OFFSET};
use ui_core::shortcut::{action_for, Shortcut, ShortcutAction, ShortcutKey};
use ui_core::stats::RosterStats;
use ui_core::theme::ThemeController;
use ui_core::tooltip::{AnchorBox, ElementId, TooltipRegistry};

pub const FIELD_NAME: FieldId = FieldId("name");
pub const FIELD_AGE: FieldId = FieldId("age");
pub const FIELD_GRADE: FieldId = FieldId("grade");
pub const FIELD_EMAIL: FieldId = FieldId("email");
pub const FIELD_PHONE: FieldId = FieldId("phone");

const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(229, 62, 62);
const SUCCESS_GREEN: egui::Color32 = egui::Color32::from_rgb(47, 133, 90);

const CARD_SIZE: egui::Vec2 = egui::Vec2 { x: 252.0, y: 120.0 };
const STAT_CARD_SIZE: egui::Vec2 = egui::Vec2 { x: 252.0, y: 104.0 };

const STAT_TOTAL_CARD: CardId = CardId(u64::MAX);
const STAT_GRADES_CARD: CardId = CardId(u64::MAX - 1);
const THEME_TOGGLE_TIP: ElementId = ElementId(u64::MAX);
/// Detail-view tooltip ids live in their own namespace so they never
/// collide with the dashboard badges for the same student.
const DETAIL_TIP_NS: u64 = 1 << 62;

fn student_card_id(id: StudentId) -> CardId {
    CardId(id.0 as u64)
}

fn grade_tip_id(id: StudentId) -> ElementId {
    ElementId(id.0 as u64)
}

fn detail_tip_id(id: StudentId) -> ElementId {
    ElementId(id.0 as u64 | DETAIL_TIP_NS)
}

fn student_form() -> FormController {
    FormController::new(vec![
        FieldSpec {
            id: FIELD_NAME,
            label: "Full name",
            kind: FieldKind::Text,
            required: true,
        },
        FieldSpec {
            id: FIELD_AGE,
            label: "Age",
            kind: FieldKind::Number,
            required: true,
        },
        FieldSpec {
            id: FIELD_GRADE,
            label: "Grade",
            kind: FieldKind::Select,
            required: true,
        },
        FieldSpec {
            id: FIELD_EMAIL,
            label: "Email",
            kind: FieldKind::Email,
            required: true,
        },
        FieldSpec {
            id: FIELD_PHONE,
            label: "Phone",
            kind: FieldKind::Phone,
            required: true,
        },
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Dashboard,
    StudentDetail(StudentId),
    AddStudent,
    EditStudent(StudentId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingCommit {
    Add,
    Edit(StudentId),
}

#[derive(Debug, Clone, Copy)]
struct CardPalette {
    card_fill: egui::Color32,
    card_stroke: egui::Color32,
    badge_fill: egui::Color32,
    hint_text: egui::Color32,
}

fn card_palette(theme: Theme) -> CardPalette {
    match theme {
        Theme::Light => CardPalette {
            card_fill: egui::Color32::from_rgb(248, 249, 252),
            card_stroke: egui::Color32::from_rgb(214, 218, 228),
            badge_fill: egui::Color32::from_rgb(226, 232, 247),
            hint_text: egui::Color32::from_rgb(110, 117, 131),
        },
        Theme::Dark => CardPalette {
            card_fill: egui::Color32::from_rgb(36, 38, 44),
            card_stroke: egui::Color32::from_rgb(58, 61, 70),
            badge_fill: egui::Color32::from_rgb(52, 58, 74),
            hint_text: egui::Color32::from_rgb(148, 153, 163),
        },
    }
}

fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

fn visible_fraction(rect: egui::Rect, viewport: egui::Rect) -> f32 {
    let overlap = rect.intersect(viewport);
    if !overlap.is_positive() || rect.area() <= 0.0 {
        return 0.0;
    }
    (overlap.area() / rect.area()).clamp(0.0, 1.0)
}

pub struct RollbookApp {
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,

    roster: Vec<Student>,
    stats: RosterStats,

    view: View,
    history: Vec<View>,

    prefs: PreferenceStore,
    theme: ThemeController,
    applied_theme: Option<Theme>,

    form: FormController,
    submitting: bool,
    pending_commit: Option<PendingCommit>,
    submit_tick: u64,

    reveal: RevealTracker,
    tooltips: TooltipRegistry,
    flashes: FlashQueue,

    frame_now: Instant,
    tick: u64,
}

impl RollbookApp {
    pub fn new(
        ui_tx: Sender<UiEvent>,
        ui_rx: Receiver<UiEvent>,
        roster: Vec<Student>,
        prefs: PreferenceStore,
        startup_flashes: Vec<(String, FlashSeverity)>,
    ) -> Self {
        let stats = RosterStats::compute(&roster);
        let theme = ThemeController::load(&prefs);
        let started = Instant::now();
        let mut flashes = FlashQueue::new();
        for (text, severity) in startup_flashes {
            flashes.push(text, severity, started);
        }
        Self {
            ui_tx,
            ui_rx,
            roster,
            stats,
            view: View::Dashboard,
            history: Vec::new(),
            prefs,
            theme,
            applied_theme: None,
            form: student_form(),
            submitting: false,
            pending_commit: None,
            submit_tick: 0,
            reveal: RevealTracker::new(),
            tooltips: TooltipRegistry::new(),
            flashes,
            frame_now: started,
            tick: 0,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ThemeChanged(theme) => {
                    debug!(theme = theme.as_str(), "theme change broadcast");
                }
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let theme = self.theme.current();
        if self.applied_theme == Some(theme) {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = match theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        ctx.set_style(style);
        self.applied_theme = Some(theme);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let mut pressed: Vec<Shortcut> = Vec::new();
        ctx.input_mut(|input| {
            if input.consume_key(egui::Modifiers::COMMAND, egui::Key::N) {
                pressed.push(Shortcut {
                    key: ShortcutKey::Char('n'),
                    command: true,
                });
            }
            if input.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
                pressed.push(Shortcut {
                    key: ShortcutKey::Escape,
                    command: false,
                });
            }
        });
        for shortcut in pressed {
            let Some(action) = action_for(shortcut) else {
                continue;
            };
            match action {
                ShortcutAction::OpenAddStudent => {
                    if self.view != View::AddStudent {
                        self.navigate(View::AddStudent);
                    }
                }
                ShortcutAction::GoBack => self.go_back(),
            }
        }
    }

    fn enter_view(&mut self, next: View) {
        self.tooltips = TooltipRegistry::new();
        self.submitting = false;
        self.pending_commit = None;
        match next {
            View::AddStudent => {
                self.form = student_form();
                self.view = next;
            }
            View::EditStudent(id) => match self.find_student(id).cloned() {
                Some(student) => {
                    let mut form = student_form();
                    form.seed_value(FIELD_NAME, student.name.clone());
                    form.seed_value(FIELD_AGE, student.age.to_string());
                    form.seed_value(FIELD_GRADE, student.grade.clone());
                    form.seed_value(FIELD_EMAIL, student.email.clone());
                    form.seed_value(FIELD_PHONE, student.phone.clone());
                    self.form = form;
                    self.view = next;
                }
                None => {
                    self.flash_error("Student not found!");
                    self.view = View::Dashboard;
                    self.history.clear();
                }
            },
            _ => self.view = next,
        }
    }

    fn navigate(&mut self, next: View) {
        self.history.push(self.view);
        self.enter_view(next);
    }

    /// No-op on the dashboard, which has nowhere to go back to.
    fn go_back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.enter_view(previous);
        }
    }

    fn reset_to_dashboard(&mut self) {
        self.history.clear();
        self.enter_view(View::Dashboard);
    }

    fn find_student(&self, id: StudentId) -> Option<&Student> {
        self.roster.iter().find(|student| student.student_id == id)
    }

    fn next_student_id(&self) -> StudentId {
        StudentId(
            self.roster
                .iter()
                .map(|student| student.student_id.0)
                .max()
                .unwrap_or(0)
                + 1,
        )
    }

    fn flash_success(&mut self, text: &str) {
        self.flashes
            .push(text, FlashSeverity::Success, self.frame_now);
    }

    fn flash_error(&mut self, text: &str) {
        self.flashes.push(text, FlashSeverity::Error, self.frame_now);
    }

    fn recompute_stats(&mut self) {
        self.stats = RosterStats::compute(&self.roster);
    }

    fn apply_commit(&mut self, commit: PendingCommit) {
        let age = parse_leading_int(self.form.value(FIELD_AGE))
            .and_then(|age| u32::try_from(age).ok());
        let Some(age) = age else {
            // Validation was lenient about a malformed age; the commit is not.
            self.flash_error(match commit {
                PendingCommit::Add => "Error adding student!",
                PendingCommit::Edit(_) => "Error updating student!",
            });
            return;
        };
        let name = self.form.value(FIELD_NAME).trim().to_string();
        let grade = self.form.value(FIELD_GRADE).to_string();
        let email = self.form.value(FIELD_EMAIL).to_string();
        let phone = self.form.value(FIELD_PHONE).to_string();

        match commit {
            PendingCommit::Add => {
                let student_id = self.next_student_id();
                self.roster.push(Student {
                    student_id,
                    name,
                    age,
                    grade,
                    email,
                    phone,
                    created_at: Utc::now(),
                });
                debug!(student_id = student_id.0, "student added");
                self.flash_success("Student added successfully!");
            }
            PendingCommit::Edit(id) => {
                match self.roster.iter_mut().find(|s| s.student_id == id) {
                    Some(student) => {
                        student.name = name;
                        student.age = age;
                        student.grade = grade;
                        student.email = email;
                        student.phone = phone;
                        debug!(student_id = id.0, "student updated");
                        self.flash_success("Student updated successfully!");
                    }
                    None => self.flash_error("Student not found!"),
                }
            }
        }
        self.recompute_stats();
        self.reset_to_dashboard();
    }

    fn delete_student(&mut self, id: StudentId) {
        let before = self.roster.len();
        self.roster.retain(|student| student.student_id != id);
        if self.roster.len() < before {
            debug!(student_id = id.0, "student deleted");
            self.flash_success("Student deleted successfully!");
        } else {
            self.flash_error("Error deleting student!");
        }
        self.recompute_stats();
        self.reset_to_dashboard();
    }

    fn tooltip_target(&mut self, response: &egui::Response, id: ElementId, label: &str) {
        if response.hovered() {
            if self.tooltips.get(id).is_none() {
                self.tooltips.hover_enter(
                    id,
                    label,
                    AnchorBox {
                        left: response.rect.left(),
                        top: response.rect.top(),
                    },
                );
            }
        } else {
            self.tooltips.hover_leave(id);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Rollbook");
                ui.label(
                    egui::RichText::new(format!("{} students", self.stats.total))
                        .color(card_palette(self.theme.current()).hint_text),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = match self.theme.current() {
                        Theme::Light => "Dark mode",
                        Theme::Dark => "Light mode",
                    };
                    let toggle = ui.button(label);
                    if toggle.clicked() {
                        let next = self.theme.toggle(&self.prefs);
                        let _ = self.ui_tx.try_send(UiEvent::ThemeChanged(next));
                    }
                    self.tooltip_target(&toggle, THEME_TOGGLE_TIP, "Switch color theme");
                });
            });
            ui.add_space(4.0);
        });
    }

    fn show_central(&mut self, ctx: &egui::Context, now: Instant) {
        // A stale detail/edit target means the record is gone; mirror the
        // server flow: error flash, then the dashboard.
        if let View::StudentDetail(id) = self.view {
            if self.find_student(id).is_none() {
                self.flash_error("Student not found!");
                self.reset_to_dashboard();
            }
        }
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Dashboard => self.show_dashboard(ui, now),
            View::StudentDetail(id) => self.show_student_detail(ui, id),
            View::AddStudent => self.show_student_form(ui, None),
            View::EditStudent(id) => self.show_student_form(ui, Some(id)),
        });
    }

    fn show_dashboard(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            ui.heading("Students");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("+ Add Student").clicked() {
                    self.navigate(View::AddStudent);
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.show_stat_cards(ui, now);
                ui.add_space(8.0);

                let students = self.roster.clone();
                let mut open_detail: Option<StudentId> = None;
                ui.horizontal_wrapped(|ui| {
                    for student in &students {
                        if self.show_student_card(ui, student, now) {
                            open_detail = Some(student.student_id);
                        }
                    }
                });
                if students.is_empty() {
                    ui.label(
                        egui::RichText::new("No students enrolled yet.")
                            .color(card_palette(self.theme.current()).hint_text),
                    );
                }
                if let Some(id) = open_detail {
                    self.navigate(View::StudentDetail(id));
                }
            });
    }

    fn show_stat_cards(&mut self, ui: &mut egui::Ui, now: Instant) {
        let palette = card_palette(self.theme.current());
        let total = self.stats.total;
        let by_grade: Vec<(String, usize)> = self
            .stats
            .by_grade
            .iter()
            .map(|(grade, count)| (grade.clone(), *count))
            .collect();

        ui.horizontal_wrapped(|ui| {
            let mut card = self.begin_reveal_card(ui, STAT_TOTAL_CARD, STAT_CARD_SIZE, false, now);
            card.ui.label(
                egui::RichText::new("Total Students")
                    .color(palette.hint_text)
                    .size(13.0),
            );
            card.ui
                .label(egui::RichText::new(total.to_string()).strong().size(34.0));

            let mut card =
                self.begin_reveal_card(ui, STAT_GRADES_CARD, STAT_CARD_SIZE, false, now);
            card.ui.label(
                egui::RichText::new("By Grade")
                    .color(palette.hint_text)
                    .size(13.0),
            );
            if by_grade.is_empty() {
                card.ui.label(egui::RichText::new("—").color(palette.hint_text));
            }
            for (grade, count) in &by_grade {
                card.ui.label(format!("{grade}: {count}"));
            }
        });
    }

    fn show_student_card(&mut self, ui: &mut egui::Ui, student: &Student, now: Instant) -> bool {
        let card = self.begin_reveal_card(
            ui,
            student_card_id(student.student_id),
            CARD_SIZE,
            true,
            now,
        );
        let palette = card_palette(self.theme.current());
        let mut card_ui = card.ui;
        let clicked = card.response.clicked();

        card_ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&student.name).strong().size(16.0));
        });
        let badge = card_ui.add(
            egui::Button::new(egui::RichText::new(&student.grade).size(12.0))
                .fill(palette.badge_fill)
                .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                .sense(egui::Sense::hover()),
        );
        self.tooltip_target(
            &badge,
            grade_tip_id(student.student_id),
            &format!("Grade: {}", student.grade),
        );
        card_ui.label(egui::RichText::new(&student.email).color(palette.hint_text));
        card_ui.label(egui::RichText::new(&student.phone).color(palette.hint_text));

        clicked
    }

    /// Allocates a card slot, feeds the reveal tracker with how much of it
    /// is inside the scroll viewport, and returns a child `Ui` positioned
    /// at the animated offset with the card chrome already painted.
    fn begin_reveal_card(
        &mut self,
        ui: &mut egui::Ui,
        id: CardId,
        size: egui::Vec2,
        clickable: bool,
        now: Instant,
    ) -> RevealCard {
        let sense = if clickable {
            egui::Sense::click()
        } else {
            egui::Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(size, sense);
        self.reveal
            .observe(id, visible_fraction(rect, ui.clip_rect()), now);
        let progress = self.reveal.progress(id, now);

        let draw_rect = rect.translate(egui::vec2(0.0, HIDDEN_OFFSET * (1.0 - progress)));
        let palette = card_palette(self.theme.current());
        let fill = if clickable && response.hovered() {
            lighten_color(palette.card_fill, 0.04)
        } else {
            palette.card_fill
        };
        ui.painter().rect(
            draw_rect,
            8.0,
            fill.gamma_multiply(progress),
            egui::Stroke::new(1.0, palette.card_stroke.gamma_multiply(progress)),
            egui::StrokeKind::Inside,
        );

        let mut card_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(draw_rect.shrink(12.0))
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        card_ui.set_clip_rect(ui.clip_rect());
        card_ui.set_opacity(progress);
        RevealCard {
            ui: card_ui,
            response,
        }
    }

    fn show_student_detail(&mut self, ui: &mut egui::Ui, id: StudentId) {
        let Some(student) = self.find_student(id).cloned() else {
            return;
        };
        let palette = card_palette(self.theme.current());

        ui.horizontal(|ui| {
            if ui.button("< Back").clicked() {
                self.go_back();
            }
            ui.heading(&student.name);
        });
        ui.separator();

        egui::Frame::NONE
            .fill(palette.card_fill)
            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(14, 12))
            .show(ui, |ui| {
                let badge = ui.add(
                    egui::Button::new(egui::RichText::new(&student.grade).size(12.0))
                        .fill(palette.badge_fill)
                        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                        .sense(egui::Sense::hover()),
                );
                self.tooltip_target(
                    &badge,
                    detail_tip_id(student.student_id),
                    &format!("Grade: {}", student.grade),
                );
                ui.label(format!("Age: {}", student.age));
                ui.label(format!("Email: {}", student.email));
                ui.label(format!("Phone: {}", student.phone));
                ui.label(
                    egui::RichText::new(format!(
                        "Enrolled {}",
                        student.created_at.format("%b %e, %Y")
                    ))
                    .color(palette.hint_text)
                    .size(12.0),
                );
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Edit").clicked() {
                self.navigate(View::EditStudent(id));
            }
            if ui
                .button(egui::RichText::new("Delete").color(ERROR_RED))
                .clicked()
            {
                self.delete_student(id);
            }
        });
    }

    fn show_student_form(&mut self, ui: &mut egui::Ui, editing: Option<StudentId>) {
        let title = match editing {
            None => "Add Student".to_string(),
            Some(id) => match self.find_student(id) {
                Some(student) => format!("Edit {}", student.name),
                None => "Edit Student".to_string(),
            },
        };
        ui.horizontal(|ui| {
            if ui.button("< Back").clicked() {
                self.go_back();
            }
            ui.heading(title);
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_max_width(420.0);
                let specs: Vec<FieldSpec> = self.form.specs().to_vec();
                for spec in &specs {
                    self.show_field_row(ui, *spec);
                    ui.add_space(6.0);
                }
                ui.add_space(6.0);
                self.show_submit_row(ui, editing);
            });
    }

    fn show_field_row(&mut self, ui: &mut egui::Ui, spec: FieldSpec) {
        ui.label(egui::RichText::new(spec.label).strong());
        let response = match spec.kind {
            FieldKind::Select => self.show_grade_select(ui, spec),
            _ => {
                let mut value = self.form.value(spec.id).to_owned();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut value)
                        .id_salt(spec.id.0)
                        .hint_text(hint_for(spec.kind))
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.form.set_value(spec.id, value);
                }
                if response.lost_focus() {
                    self.form.handle_blur(spec.id);
                }
                response
            }
        };
        if let Some(message) = self.form.error(spec.id).map(str::to_owned) {
            ui.painter().rect_stroke(
                response.rect,
                4.0,
                egui::Stroke::new(1.0, ERROR_RED),
                egui::StrokeKind::Outside,
            );
            ui.label(
                egui::RichText::new(format!("⚠ {message}"))
                    .color(ERROR_RED)
                    .size(12.0),
            );
        }
    }

    fn show_grade_select(&mut self, ui: &mut egui::Ui, spec: FieldSpec) -> egui::Response {
        let current = self.form.value(spec.id).to_owned();
        let mut selected = current.clone();
        let display = if current.is_empty() {
            "Select a grade".to_string()
        } else {
            current.clone()
        };
        let combo = egui::ComboBox::from_id_salt(spec.id.0)
            .selected_text(display)
            .width(200.0)
            .show_ui(ui, |ui| {
                for grade in GRADE_LEVELS {
                    ui.selectable_value(&mut selected, (*grade).to_string(), *grade);
                }
            });
        if selected != current {
            self.form.set_value(spec.id, selected);
        }
        combo.response
    }

    fn show_submit_row(&mut self, ui: &mut egui::Ui, editing: Option<StudentId>) {
        if self.submitting {
            ui.horizontal(|ui| {
                ui.add_enabled(false, egui::Button::new("Processing..."));
                ui.spinner();
            });
            return;
        }
        ui.horizontal(|ui| {
            let label = match editing {
                None => "Add Student",
                Some(_) => "Save Changes",
            };
            if ui.button(label).clicked() {
                match self.form.submit() {
                    SubmitOutcome::Accepted => {
                        self.submitting = true;
                        self.submit_tick = self.tick;
                        self.pending_commit = Some(match editing {
                            None => PendingCommit::Add,
                            Some(id) => PendingCommit::Edit(id),
                        });
                    }
                    SubmitOutcome::Rejected { error_count } => {
                        debug!(error_count, "submission suppressed");
                    }
                }
            }
            if ui.button("Cancel").clicked() {
                self.go_back();
            }
        });
    }

    fn show_tooltips(&self, ctx: &egui::Context) {
        for (id, tip) in self.tooltips.iter() {
            egui::Area::new(egui::Id::new(("tooltip", id.0)))
                .fixed_pos(egui::pos2(tip.left, tip.top))
                .order(egui::Order::Tooltip)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::NONE
                        .fill(egui::Color32::from_black_alpha(204))
                        .corner_radius(4.0)
                        .inner_margin(egui::Margin::symmetric(10, 5))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&tip.text)
                                    .color(egui::Color32::WHITE)
                                    .size(12.0),
                            );
                        });
                });
        }
    }

    fn show_flashes(&mut self, ctx: &egui::Context, now: Instant) {
        for (index, (flash, fade)) in self.flashes.visible(now).into_iter().enumerate() {
            let fill = match flash.severity {
                FlashSeverity::Success => SUCCESS_GREEN,
                FlashSeverity::Error => ERROR_RED,
            };
            egui::Area::new(egui::Id::new(("flash", index)))
                .anchor(
                    egui::Align2::LEFT_TOP,
                    egui::vec2(16.0 - fade * 360.0, 48.0 + index as f32 * 46.0),
                )
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    ui.set_opacity(1.0 - fade);
                    egui::Frame::NONE
                        .fill(fill)
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&flash.text).color(egui::Color32::WHITE),
                            );
                        });
                });
        }
    }
}

struct RevealCard {
    ui: egui::Ui,
    response: egui::Response,
}

fn hint_for(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "Jane Doe",
        FieldKind::Email => "jane@example.com",
        FieldKind::Phone => "555-0100",
        FieldKind::Number => "16",
        FieldKind::Select => "",
    }
}

impl eframe::App for RollbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick = self.tick.wrapping_add(1);
        let now = Instant::now();
        self.frame_now = now;

        self.process_ui_events();
        self.apply_theme_if_needed(ctx);
        self.handle_shortcuts(ctx);

        // Let the submit spinner render for a frame before the roster
        // mutation lands.
        if self.pending_commit.is_some() && self.tick >= self.submit_tick.wrapping_add(2) {
            if let Some(commit) = self.pending_commit.take() {
                self.apply_commit(commit);
                self.submitting = false;
            }
        }

        self.flashes.tick(now);

        self.show_top_bar(ctx);
        self.show_central(ctx, now);
        self.show_tooltips(ctx);
        self.show_flashes(ctx, now);

        let animating =
            self.reveal.any_animating(now) || !self.flashes.is_empty() || self.submitting;
        if animating {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
