#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::path::PathBuf;

use clap::Parser;
use eframe::{egui, App, Frame};
use yeast_converter::{
    config,
    i18n::{self, keys},
    logging,
    units::GRAM_SUFFIX,
    Converter, YeastKind,
};

#[derive(Debug, Parser)]
#[command(name = "yeast_converter", version)]
struct GuiCli {
    /// 설정 파일 경로
    #[arg(short, long, env = "YEAST_CONFIG")]
    config: Option<PathBuf>,

    /// UI 언어 (auto, en, ko)
    #[arg(short = 'L', long)]
    lang: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    logging::init();
    let cli = GuiCli::parse();
    let app_cfg = config::load_or_default(cli.config.as_deref()).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "configuration ignored");
        config::Config::default()
    });
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(app_cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, app_cfg.locales_dir.as_deref());
    let title = tr.t(keys::APP_TITLE).to_string();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 200.0])
            .with_min_inner_size([380.0, 180.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(&app_cfg, tr))),
    )
}

/// 세 종류를 가로로 나열한 세그먼트 선택기.
fn kind_selector(ui: &mut egui::Ui, current: &mut YeastKind) {
    ui.horizontal(|ui| {
        for kind in YeastKind::ALL {
            ui.selectable_value(current, kind, kind.label());
        }
    });
}

struct GuiApp {
    converter: Converter,
    tr: i18n::Translator,
    focus_requested: bool,
}

impl GuiApp {
    fn new(cfg: &config::Config, tr: i18n::Translator) -> Self {
        Self {
            converter: Converter::new(cfg.default_from, cfg.default_to),
            tr,
            focus_requested: false,
        }
    }

    fn ui_kinds(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("kind_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong(self.tr.t(keys::LABEL_FROM));
                let mut from = self.converter.from_kind();
                kind_selector(ui, &mut from);
                self.converter.set_from_kind(from);
                ui.end_row();

                ui.strong(self.tr.t(keys::LABEL_TO));
                let mut to = self.converter.to_kind();
                kind_selector(ui, &mut to);
                self.converter.set_to_kind(to);
                ui.end_row();
            });
    }

    /// 입력란과 결과. 결과는 매 프레임 현재 입력에서 다시 계산한다.
    fn ui_amounts(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("amount_grid")
            .num_columns(3)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong(self.tr.t(keys::LABEL_FROM));
                let resp = ui.add(
                    egui::TextEdit::singleline(self.converter.input_mut())
                        .hint_text("0")
                        .desired_width(140.0),
                );
                if !self.focus_requested {
                    resp.request_focus();
                    self.focus_requested = true;
                }
                ui.weak(GRAM_SUFFIX);
                ui.end_row();

                ui.strong(self.tr.t(keys::LABEL_TO));
                ui.label(self.converter.output());
                ui.weak(GRAM_SUFFIX);
                ui.end_row();
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            self.ui_kinds(ui);
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);
            self.ui_amounts(ui);
        });
    }
}
