use agro_news_tui::data::queries::search_news;
use agro_news_tui::data::Dataset;
use agro_news_tui::domain::Month;
use agro_news_tui::{FilterCriteria, MonthRange, NewsRecord, Selection, ZoneRow};
use tracing::{debug, warn};

use crate::app::input::helpers::{wrap_decrement, wrap_increment};

pub const ALL_PRODUCTS: &str = "Todos";
pub const ALL_VARIETIES: &str = "Todas";
pub const ANY_MONTH: &str = "Todos";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Dashboard,
    NewsDetails,
}

/// Selector that receives Left/Right in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Product,
    Variety,
    FromMonth,
    ToMonth,
}

impl FilterField {
    pub const ALL: [Self; 4] = [Self::Product, Self::Variety, Self::FromMonth, Self::ToMonth];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Product => "Producto",
            Self::Variety => "Variedad",
            Self::FromMonth => "Desde",
            Self::ToMonth => "Hasta",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Product => Self::Variety,
            Self::Variety => Self::FromMonth,
            Self::FromMonth => Self::ToMonth,
            Self::ToMonth => Self::Product,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Product => Self::ToMonth,
            Self::Variety => Self::Product,
            Self::FromMonth => Self::Variety,
            Self::ToMonth => Self::FromMonth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTab {
    Terms,
    Map,
    Timeline,
    Zones,
}

impl ChartTab {
    pub const ALL: [Self; 4] = [Self::Terms, Self::Map, Self::Timeline, Self::Zones];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Terms),
            1 => Some(Self::Map),
            2 => Some(Self::Timeline),
            3 => Some(Self::Zones),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Terms => "Palabras clave",
            Self::Map => "Mapa",
            Self::Timeline => "Serie temporal",
            Self::Zones => "Zonas",
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub dataset: Dataset,
    pub criteria: FilterCriteria,
    pub filtered_news: Vec<NewsRecord>,
    pub filtered_zones: Vec<ZoneRow>,
    /// Positions in `filtered_news` shown in the table, after search.
    pub visible_news: Vec<usize>,
    pub focus: FilterField,
    pub product_index: usize,
    pub variety_index: usize,
    pub month_start_index: usize,
    pub month_end_index: usize,
    pub selected_news_index: usize,
    pub chart_tab_index: usize,
    pub search_active: bool,
    pub search_query: String,
    pub show_help: bool,
    pub status_message: String,
}

impl App {
    pub fn new(dataset: Dataset) -> Self {
        let mut app = Self {
            running: true,
            screen: AppScreen::Dashboard,
            dataset,
            criteria: FilterCriteria::default(),
            filtered_news: Vec::new(),
            filtered_zones: Vec::new(),
            visible_news: Vec::new(),
            focus: FilterField::Product,
            product_index: 0,
            variety_index: 0,
            month_start_index: 0,
            month_end_index: 0,
            selected_news_index: 0,
            chart_tab_index: 0,
            search_active: false,
            search_query: String::new(),
            show_help: false,
            status_message: String::new(),
        };
        app.apply_filters();
        app
    }

    /// Starts from a selection given on the command line. Values that are
    /// not among the options fall back to "all", and the status line says so.
    pub fn with_criteria(dataset: Dataset, criteria: &FilterCriteria) -> Self {
        let mut app = Self::new(dataset);
        let mut ignored = Vec::new();

        if let Some(product) = criteria.product.value() {
            if app.dataset.index.contains_product(product) {
                app.product_index = app
                    .product_options()
                    .iter()
                    .position(|option| option == product)
                    .unwrap_or(0);
            } else {
                ignored.push(format!("producto \"{product}\""));
            }
        }
        if let Some(variety) = criteria.variety.value() {
            // Variety options exist only under a selected product
            match app
                .variety_options()
                .iter()
                .position(|option| option == variety)
            {
                Some(index) => app.variety_index = index,
                None => ignored.push(format!("variedad \"{variety}\"")),
            }
        }
        if let Some(range) = criteria.months {
            app.month_start_index = range.start.number() as usize;
            app.month_end_index = range.end.number() as usize;
        }

        app.apply_filters();
        if !ignored.is_empty() {
            warn!(ignored = ?ignored, "command-line selection not among the options");
            app.status_message = format!(
                "Sin coincidencia, se muestra todo para: {}",
                ignored.join(", ")
            );
        }
        app
    }

    pub fn product_options(&self) -> Vec<String> {
        std::iter::once(ALL_PRODUCTS.to_string())
            .chain(
                self.dataset
                    .index
                    .products()
                    .into_iter()
                    .map(ToString::to_string),
            )
            .collect()
    }

    pub fn variety_options(&self) -> Vec<String> {
        let varieties = self
            .selected_product()
            .map(|product| self.dataset.index.varieties(product))
            .unwrap_or_default();
        std::iter::once(ALL_VARIETIES.to_string())
            .chain(varieties.into_iter().map(ToString::to_string))
            .collect()
    }

    pub fn month_options() -> Vec<&'static str> {
        std::iter::once(ANY_MONTH)
            .chain(Month::ALL.iter().map(|month| month.label()))
            .collect()
    }

    pub fn selected_product(&self) -> Option<&str> {
        if self.product_index == 0 {
            return None;
        }
        self.dataset
            .index
            .products()
            .get(self.product_index - 1)
            .copied()
    }

    pub fn selected_month_range(&self) -> Option<MonthRange> {
        let start = Month::from_index(self.month_start_index.checked_sub(1)?)?;
        let end = self
            .month_end_index
            .checked_sub(1)
            .and_then(Month::from_index)
            .unwrap_or(start);
        Some(MonthRange::from_months(start, end))
    }

    pub fn option_label(&self, field: FilterField) -> String {
        match field {
            FilterField::Product => self
                .selected_product()
                .unwrap_or(ALL_PRODUCTS)
                .to_string(),
            FilterField::Variety => self
                .variety_options()
                .get(self.variety_index)
                .cloned()
                .unwrap_or_else(|| ALL_VARIETIES.to_string()),
            FilterField::FromMonth => Self::month_options()[self.month_start_index].to_string(),
            FilterField::ToMonth => Self::month_options()[self.month_end_index].to_string(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Moves the focused selector forward (`forward`) or backward.
    pub fn cycle_focused(&mut self, forward: bool) {
        let step = |index: usize, len: usize| {
            if forward {
                wrap_increment(index, len)
            } else {
                wrap_decrement(index, len)
            }
        };

        match self.focus {
            FilterField::Product => {
                self.product_index = step(self.product_index, self.product_options().len());
                self.variety_index = 0;
            }
            FilterField::Variety => {
                if self.product_index == 0 {
                    self.status_message = "Selecciona un producto primero".to_string();
                    return;
                }
                self.variety_index = step(self.variety_index, self.variety_options().len());
            }
            FilterField::FromMonth => {
                self.month_start_index = step(self.month_start_index, Self::month_options().len());
            }
            FilterField::ToMonth => {
                self.month_end_index = step(self.month_end_index, Self::month_options().len());
            }
        }

        self.apply_filters();
    }

    /// Recomputes both filtered tables from the selector state.
    pub fn apply_filters(&mut self) {
        let product = Selection::from_option(self.selected_product());
        let variety = if self.variety_index == 0 {
            Selection::All
        } else {
            Selection::from_option(
                self.variety_options()
                    .get(self.variety_index)
                    .map(String::as_str),
            )
        };

        self.criteria = FilterCriteria::new(product, variety, self.selected_month_range());
        let (news, zones) = self.dataset.filtered(&self.criteria);
        self.filtered_news = news;
        self.filtered_zones = zones;
        debug!(
            news = self.filtered_news.len(),
            zones = self.filtered_zones.len(),
            "filters applied"
        );

        self.apply_search_filter();
        self.status_message.clear();
    }

    pub fn apply_search_filter(&mut self) {
        self.visible_news = search_news(&self.filtered_news, &self.search_query);
        self.selected_news_index = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.apply_search_filter();
    }

    pub fn reset_filters(&mut self) {
        self.product_index = 0;
        self.variety_index = 0;
        self.month_start_index = 0;
        self.month_end_index = 0;
        self.search_query.clear();
        self.search_active = false;
        self.apply_filters();
        self.status_message = "Filtros restablecidos".to_string();
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &NewsRecord> {
        self.visible_news
            .iter()
            .filter_map(|index| self.filtered_news.get(*index))
    }

    pub fn selected_news(&self) -> Option<&NewsRecord> {
        self.visible_news
            .get(self.selected_news_index)
            .and_then(|index| self.filtered_news.get(*index))
    }

    pub fn chart_tab(&self) -> ChartTab {
        ChartTab::from_index(self.chart_tab_index).unwrap_or(ChartTab::Terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn app() -> App {
        let news = vec![
            json!({
                "titulo": "Hass en enero",
                "fecha_articulo": "2024-01-10",
                "entidades": {"producto": "Aguacate", "variedad": "Hass/Fuerte"}
            }),
            json!({
                "titulo": "Mango de verano",
                "fecha_articulo": "2024-07-10",
                "entidades": {"producto": "Mango", "variedad": "Ataulfo"}
            }),
        ];
        let zones = vec![json!({
            "entidades": {"producto": "Aguacate", "variedad": "Hass"},
            "zonas_produccion": [{"periodo_produccion": {"inicio": 11, "fin": 2}}]
        })];
        App::new(Dataset::from_documents(&news, &zones))
    }

    #[test]
    fn starts_unfiltered() {
        let app = app();
        assert_eq!(app.filtered_news.len(), 2);
        assert_eq!(app.filtered_zones.len(), 1);
        assert_eq!(app.product_options(), vec!["Todos", "Aguacate", "Mango"]);
        assert_eq!(app.variety_options(), vec!["Todas"]);
    }

    #[test]
    fn cycling_product_resets_variety_and_filters() {
        let mut app = app();
        app.focus = FilterField::Product;
        app.cycle_focused(true);

        assert_eq!(app.selected_product(), Some("Aguacate"));
        assert_eq!(app.variety_options(), vec!["Todas", "Fuerte", "Hass"]);
        assert_eq!(app.filtered_news.len(), 1);

        app.focus = FilterField::Variety;
        app.cycle_focused(true);
        assert_eq!(app.criteria.variety, Selection::only("Fuerte"));
        assert!(app.filtered_zones.is_empty());

        app.focus = FilterField::Product;
        app.cycle_focused(false);
        assert_eq!(app.variety_index, 0);
        assert!(app.criteria.is_unfiltered());
    }

    #[test]
    fn variety_needs_a_product() {
        let mut app = app();
        app.focus = FilterField::Variety;
        app.cycle_focused(true);
        assert_eq!(app.variety_index, 0);
        assert!(!app.status_message.is_empty());
    }

    #[test]
    fn month_window_defaults_end_to_start() {
        let mut app = app();
        app.focus = FilterField::FromMonth;
        app.cycle_focused(false);

        assert_eq!(
            app.selected_month_range(),
            Some(MonthRange::from_months(Month::December, Month::December))
        );
        assert!(app.filtered_news.is_empty());
        assert_eq!(app.filtered_zones.len(), 1);
    }

    #[test]
    fn search_narrows_visible_rows() {
        let mut app = app();
        app.search_query = "mango".to_string();
        app.apply_search_filter();

        let titles: Vec<_> = app.visible_rows().filter_map(|r| r.title.as_deref()).collect();
        assert_eq!(titles, vec!["Mango de verano"]);

        app.clear_search();
        assert_eq!(app.visible_rows().count(), 2);
    }

    #[test]
    fn cli_selection_maps_onto_options() {
        let criteria = FilterCriteria::new(
            Selection::only("Aguacate"),
            Selection::only("Hass"),
            MonthRange::new(1, 3).ok(),
        );
        let base = app();
        let app = App::with_criteria(base.dataset, &criteria);

        assert_eq!(app.selected_product(), Some("Aguacate"));
        assert_eq!(app.criteria, criteria);
        assert_eq!(app.filtered_news.len(), 1);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn unknown_cli_selection_is_reported_on_the_status_line() {
        let criteria = FilterCriteria::new(Selection::only("Papaya"), Selection::only("Maradol"), None);
        let base = app();
        let app = App::with_criteria(base.dataset, &criteria);

        assert_eq!(app.product_index, 0);
        assert_eq!(app.variety_index, 0);
        assert!(app.criteria.is_unfiltered());
        assert!(app.status_message.contains("Papaya"));
        assert!(app.status_message.contains("Maradol"));
    }

    #[test]
    fn cli_variety_without_product_is_reported() {
        let criteria = FilterCriteria::new(Selection::All, Selection::only("Hass"), None);
        let base = app();
        let app = App::with_criteria(base.dataset, &criteria);

        assert!(app.criteria.variety.is_all());
        assert!(app.status_message.contains("Hass"));
    }
}
