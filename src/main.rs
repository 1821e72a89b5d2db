// src/main.rs
//
// Calculatrice Math : lancement natif (fenêtre) ou web (canvas wasm32).
//
// Le noyau (noyau/) ne connaît pas egui ; app/ ne fait que lui passer des
// identifiants de touche et dessiner ce qu’il rend.
//
// En wasm32, la page hôte fournit <canvas id="the_canvas_id"></canvas>.
//
// Journal : seul le web branche une sortie (console_log). En natif, aucun
// logger n’est installé et les macros log:: restent muettes.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

const TITRE_APP: &str = "Calculatrice Math";

fn creer_app(_cc: &eframe::CreationContext<'_>) -> Box<dyn eframe::App> {
    Box::<AppCalc>::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let viewport = egui::ViewportBuilder::default()
        .with_title(TITRE_APP)
        .with_inner_size([460.0, 640.0])
        .with_min_inner_size([400.0, 560.0]);

    eframe::run_native(
        TITRE_APP,
        eframe::NativeOptions {
            viewport,
            ..Default::default()
        },
        Box::new(|cc| Ok(creer_app(cc))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // rien : le navigateur appelle `web::start`
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    use super::{creer_app, TITRE_APP};

    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        // déjà branché => on garde l’existant
        console_log::init_with_level(log::Level::Debug).ok();

        let canvas = trouver_canvas()?;
        log::info!("démarrage web: {TITRE_APP} sur #{CANVAS_ID}");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(creer_app(cc))),
            )
            .await
    }

    /// Titre de l’onglet + canvas de la page hôte.
    fn trouver_canvas() -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("pas de document (hors navigateur ?)"))?;

        document.set_title(TITRE_APP);

        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas absent de la page"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("#the_canvas_id n’est pas un <canvas>"))
    }
}
