use crate::domain::listing::{self, ListQuery, StatusFilter};
use crate::domain::Appraisal;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ListVm<'a> {
    pub rows: &'a [Appraisal],
    pub query: &'a ListQuery,
    /// Records before filtering.
    pub total: usize,
}

pub fn list_page(vm: &ListVm<'_>) -> Markup {
    desktop_layout(
        "Appraisals",
        html! {
            main class="container" {
                div class="card-head" {
                    h1 { "Appraisals" }
                    a href="/appraisals/new" { "+ New appraisal" }
                }

                form method="get" action="/" class="grid" {
                    label { "Search"
                        input type="search" name="q" value=(vm.query.search)
                            placeholder="Title, address, suburb or postcode";
                    }
                    label { "Status"
                        select name="status" {
                            @for filter in [StatusFilter::All, StatusFilter::Draft, StatusFilter::Completed] {
                                option value=(filter.code()) selected[filter == vm.query.status] {
                                    (match filter {
                                        StatusFilter::All => "All",
                                        StatusFilter::Draft => "Draft",
                                        StatusFilter::Completed => "Completed",
                                    })
                                }
                            }
                        }
                    }
                    button type="submit" { "Filter" }
                }

                @if vm.total == 0 {
                    p { "No appraisals yet. Start one with “New appraisal”." }
                } @else if vm.rows.is_empty() {
                    p { "No appraisals match your filters." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Title" }
                                th { "Address" }
                                th { "Status" }
                                th { "Updated" }
                                th {}
                            }
                        }
                        tbody {
                            @for row in vm.rows {
                                (list_row(row))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn list_row(row: &Appraisal) -> Markup {
    html! {
        tr {
            td { a href=(format!("/appraisals/{}/edit", row.id)) { (listing::display_title(row)) } }
            td { (listing::display_address(row)) }
            td { span class=(format!("status status-{}", row.status.as_str().to_lowercase())) { (row.status.label()) } }
            td { (listing::format_date(&row.updated_at)) }
            td {
                a href=(format!("/appraisals/{}/edit", row.id)) { "Edit" }
                " · "
                a href=(format!("/appraisals/{}/summary", row.id)) { "Summary" }
            }
        }
    }
}
