use maud::{html, Markup, PreEscaped, DOCTYPE};

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #0f172a; background: #f8fafc; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,.08); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main.container { max-width: 960px; margin: 1.5rem auto; padding: 0 1rem; }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.notice { padding: 0.5rem 0.75rem; border-radius: 6px; margin-bottom: 1rem; }
.notice-info { background: #ecfdf5; color: #065f46; }
.notice-warning { background: #fffbeb; color: #92400e; }
.notice-error { background: #fef2f2; color: #991b1b; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 0.75rem; }
label { display: block; font-size: 0.85rem; font-weight: 500; }
input, select, textarea { width: 100%; box-sizing: border-box; }
.chips button[aria-pressed="true"] { background: #4f46e5; color: #fff; }
@media print { .no-print { display: none !important; } body { background: #fff; } }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(BASE_CSS)) }
            }
            body {
                header class="no-print" {
                    h3 { "Appraisals" }
                    nav {
                        ul {
                            li { a href="/" { "All appraisals" } }
                            li { a href="/appraisals/new" { "New appraisal" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
