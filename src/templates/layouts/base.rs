use crate::auth::Viewer;
use crate::templates::components::{footer, navbar};
use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, viewer: &Viewer, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Charaka Trading" }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="page" {
                (navbar(viewer))
                main class="page-main" {
                    (content)
                }
                (footer())
            }
        }
    }
}
