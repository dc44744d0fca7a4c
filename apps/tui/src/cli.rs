use agro_news_tui::{DashboardError, FilterCriteria, MonthRange, Selection};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "agro_news_tui", version, about = "Agricultural news dashboard")]
pub struct CliArgs {
    /// Print a summary for the selection and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override news file path
    #[arg(long, value_name = "PATH")]
    pub news: Option<String>,

    /// Override zones file path
    #[arg(long, value_name = "PATH")]
    pub zones: Option<String>,

    /// Product to select ("Todos" for all)
    #[arg(long)]
    pub product: Option<String>,

    /// Variety to select ("Todas" for all)
    #[arg(long)]
    pub variety: Option<String>,

    /// First month of the window (1-12)
    #[arg(long, value_name = "MONTH", requires = "to", allow_negative_numbers = true)]
    pub from: Option<i64>,

    /// Last month of the window (1-12), may wrap past December
    #[arg(long, value_name = "MONTH", requires = "from", allow_negative_numbers = true)]
    pub to: Option<i64>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.news {
            std::env::set_var("NEWS_FILE", path);
        }
        if let Some(path) = &self.zones {
            std::env::set_var("ZONES_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Selection given on the command line.
    pub fn criteria(&self) -> Result<FilterCriteria, DashboardError> {
        let months = match (self.from, self.to) {
            (Some(start), Some(end)) => Some(MonthRange::new(start, end)?),
            _ => None,
        };
        Ok(FilterCriteria::new(
            Selection::from_option(self.product.as_deref()),
            Selection::from_option(self.variety.as_deref()),
            months,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agro_news_tui::domain::Month;
    use clap::CommandFactory;

    #[test]
    fn parses_selection_flags() {
        let args = CliArgs::parse_from([
            "agro_news_tui",
            "--product",
            "Aguacate",
            "--variety",
            "Hass",
            "--from",
            "11",
            "--to",
            "2",
        ]);

        let criteria = args.criteria().unwrap_or_default();

        assert_eq!(criteria.product, Selection::only("Aguacate"));
        assert_eq!(criteria.variety, Selection::only("Hass"));
        assert_eq!(
            criteria.months,
            Some(MonthRange::from_months(Month::November, Month::February))
        );
    }

    #[test]
    fn variety_alone_is_passed_through() {
        let args = CliArgs::parse_from(["agro_news_tui", "--headless", "--variety", "Hass"]);

        let criteria = args.criteria().unwrap_or_default();

        assert_eq!(criteria.product, Selection::All);
        assert_eq!(criteria.variety, Selection::only("Hass"));
    }

    #[test]
    fn out_of_range_months_are_reported() {
        let args = CliArgs::parse_from(["agro_news_tui", "--from", "0", "--to", "13"]);
        assert!(matches!(
            args.criteria(),
            Err(DashboardError::InvalidRange { start: 0, end: 13 })
        ));
    }

    #[test]
    fn month_bounds_must_come_together() {
        assert!(CliArgs::try_parse_from(["agro_news_tui", "--from", "3"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }
}
