use crate::domain::filter::ALL;
use crate::domain::{FilterCriteria, SortKey, VehicleStatus};
use maud::{html, Markup};

pub const FILTER_FORM_ID: &str = "vehicle-filters";

/// Sidebar filter form. Submitting reloads `/vehicles` with the criteria in the query.
pub fn filter_panel(criteria: &FilterCriteria, brands: &[String]) -> Markup {
    html! {
        form id=(FILTER_FORM_ID) class="filters" method="get" action="/vehicles" {
            h3 { "Filters" }
            hr;

            label for="search" { "Search" }
            input
                type="search"
                id="search"
                name="search"
                placeholder="Search vehicles..."
                value=(criteria.search);

            label for="status" { "Status" }
            select id="status" name="status" {
                option value=(ALL) selected[criteria.status == ALL] { "All Statuses" }
                @for status in VehicleStatus::ALL {
                    option value=(status.as_str()) selected[criteria.status == status.as_str()] {
                        (status.label())
                    }
                }
            }

            label for="brand" { "Brand" }
            select id="brand" name="brand" {
                option value=(ALL) selected[criteria.brand == ALL] { "All Brands" }
                @for brand in brands {
                    option value=(brand) selected[&criteria.brand == brand] { (brand) }
                }
            }

            label { "Price Range" }
            div class="price-range" {
                input type="number" name="min_price" placeholder="Min" min="0" value=(criteria.min_price);
                span { "-" }
                input type="number" name="max_price" placeholder="Max" min="0" value=(criteria.max_price);
            }

            button type="submit" class="btn btn-block" { "Apply Filters" }
            a href="/vehicles" class="btn btn-ghost btn-block" { "✕ Reset Filters" }
        }
    }
}

/// Sort select shown above the grid; it belongs to the sidebar form.
pub fn sort_select(current: SortKey) -> Markup {
    html! {
        select name="sort" form=(FILTER_FORM_ID) aria-label="Sort By" onchange="this.form.submit()" {
            @for key in SortKey::OPTIONS {
                option value=(key.as_str()) selected[key == current] { (key.label()) }
            }
        }
    }
}
