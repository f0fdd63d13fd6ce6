// src/main.rs
//
// Calculatrice à découpage : fenêtre native, canvas web, ou évaluation en ligne de commande
// ---------------------------------------------------------------------------------------
//   calculatrice                   fenêtre eframe
//   calculatrice --evaluer "2+3"   affiche le résultat (ou Error), sans fenêtre
//   wasm32                         WebRunner sur <canvas id="the_canvas_id">

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Scientific Calculator";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "calculatrice", version, about = "Calculatrice scientifique à découpage")]
struct Args {
    /// Évalue l’expression, affiche le résultat (ou "Error") et quitte sans fenêtre.
    #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
    evaluer: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG=debug pour suivre les découpes ; silencieux par défaut
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    installer_journal();
    let args = Args::parse();

    if let Some(expr) = args.evaluer {
        let resultat = noyau::evaluer_expression(&expr);
        println!("{}", noyau::texte_affichage(&resultat));
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([340.0, 420.0])
            .with_min_inner_size([320.0, 380.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::prelude::wasm_bindgen;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    /// `<canvas id="...">` attendu dans index.html.
    const ID_CANVAS: &str = "the_canvas_id";

    #[wasm_bindgen(start)]
    pub async fn demarrer() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|fenetre| fenetre.document())
            .ok_or_else(|| JsValue::from_str("pas de document dans cette page"))?;
        document.set_title(TITRE_APP);

        let canvas = document
            .get_element_by_id(ID_CANVAS)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| JsValue::from_str(&format!("aucun <canvas id=\"{ID_CANVAS}\">")))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }
}
