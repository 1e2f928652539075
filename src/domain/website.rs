use std::str::FromStr;

use url::form_urlencoded;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Website {
    RebelSport,
    HarveyNorman,
    Ebay,
    TheGoodGuys,
    Kogan,
    Officeworks,
    JbHifi,
    AjeWorld,
    Myer,
    Google,
    Jd,
}

pub const ALL_WEBSITES: [Website; 11] = [
    Website::RebelSport,
    Website::HarveyNorman,
    Website::Ebay,
    Website::TheGoodGuys,
    Website::Kogan,
    Website::Officeworks,
    Website::JbHifi,
    Website::AjeWorld,
    Website::Myer,
    Website::Google,
    Website::Jd,
];

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("Unsupported website name: {0}")]
pub struct UnsupportedWebsite(pub String);

impl Website {
    pub fn id(&self) -> &'static str {
        match self {
            Website::RebelSport => "rebelsport",
            Website::HarveyNorman => "harveynorman",
            Website::Ebay => "ebay",
            Website::TheGoodGuys => "thegoodguys",
            Website::Kogan => "kogan",
            Website::Officeworks => "officeworks",
            Website::JbHifi => "jbhifi",
            Website::AjeWorld => "ajeworld",
            Website::Myer => "myer",
            Website::Google => "google",
            Website::Jd => "jd",
        }
    }

    pub fn search_url(&self, product_name: &str) -> String {
        let plus = encode_plus(product_name);
        let pct = encode_percent(product_name);

        match self {
            Website::RebelSport => format!("https://www.rebelsport.com.au/search?q={}", pct),
            Website::HarveyNorman => format!("https://www.harveynorman.com.au/search?q={}", plus),
            Website::Ebay => format!(
                "https://www.ebay.com.au/sch/i.html?_from=R40&_trksid=p4432023.m570.l1313&_nkw={}&_sacat=0",
                plus
            ),
            Website::TheGoodGuys => format!(
                "https://www.thegoodguys.com.au/SearchDisplay?categoryId=&storeId=900&catalogId=30000&langId=-1&sType=SimpleSearch&resultCatEntryType=2&showResultsPage=true&searchSource=Q&pageView=&beginIndex=0&orderBy=0&pageSize=30&searchTerm={}",
                plus
            ),
            Website::Kogan => format!("https://www.kogan.com/au/shop/?q={}", plus),
            Website::Officeworks => format!(
                "https://www.officeworks.com.au/shop/officeworks/search?q={}&view=grid&page=1&sortBy=bestmatch",
                pct
            ),
            Website::JbHifi => format!(
                "https://www.jbhifi.com.au/search?page=1&query={}&saleItems=false&toggle%5BonPromotion%5D=false",
                pct
            ),
            Website::AjeWorld => format!("https://ajeworld.com.au/collections/shop?q={}", plus),
            Website::Myer => format!("https://www.myer.com.au/search?query={}", plus),
            Website::Google => format!(
                "https://www.google.com/search?tbm=shop&hl=en&psb=1&ved=2ahUKEwjli4qPuLuAAxXjqWYCHX_FCUIQu-kFegQIABAL&q={}",
                pct
            ),
            Website::Jd => format!("https://www.jd-sports.com.au/search/{}/", plus),
        }
    }
}

impl FromStr for Website {
    type Err = UnsupportedWebsite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_WEBSITES
            .iter()
            .find(|w| w.id() == s)
            .copied()
            .ok_or_else(|| UnsupportedWebsite(s.to_string()))
    }
}

/// Builds the search url for a website id, `None` when the id is unknown
pub fn format_search_url(product_name: &str, website_name: &str) -> Option<String> {
    match website_name.parse::<Website>() {
        Ok(website) => Some(website.search_url(product_name)),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}

fn encode_plus(product_name: &str) -> String {
    form_urlencoded::byte_serialize(product_name.as_bytes()).collect()
}

// A literal '+' is serialized as %2B, so every remaining '+' was a space
fn encode_percent(product_name: &str) -> String {
    encode_plus(product_name).replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::{format_search_url, Website, ALL_WEBSITES};

    #[test]
    fn ebay_url_for_single_word() {
        let url = format_search_url("laptop", "ebay").unwrap();

        assert_eq!(
            url,
            "https://www.ebay.com.au/sch/i.html?_from=R40&_trksid=p4432023.m570.l1313&_nkw=laptop&_sacat=0"
        );
    }

    #[test]
    fn percent_sites_encode_spaces_as_percent_twenty() {
        for website in [
            Website::RebelSport,
            Website::Officeworks,
            Website::JbHifi,
            Website::Google,
        ] {
            let url = website.search_url("running shoes");
            assert!(url.contains("running%20shoes"), "{}", url);
            assert!(!url.contains("running+shoes"), "{}", url);
        }
    }

    #[test]
    fn plus_sites_encode_spaces_as_plus() {
        for website in [
            Website::HarveyNorman,
            Website::Ebay,
            Website::TheGoodGuys,
            Website::Kogan,
            Website::AjeWorld,
            Website::Myer,
            Website::Jd,
        ] {
            let url = website.search_url("running shoes");
            assert!(url.contains("running+shoes"), "{}", url);
        }
    }

    #[test]
    fn every_known_id_round_trips() {
        for website in ALL_WEBSITES {
            assert_eq!(website.id().parse::<Website>(), Ok(website));
            assert!(format_search_url("tv", website.id()).is_some());
        }
    }

    #[test]
    fn jd_puts_product_in_path() {
        assert_eq!(
            Website::Jd.search_url("air max"),
            "https://www.jd-sports.com.au/search/air+max/"
        );
    }

    #[test]
    fn literal_plus_is_escaped() {
        let url = Website::Kogan.search_url("c++ book");
        assert_eq!(url, "https://www.kogan.com/au/shop/?q=c%2B%2B+book");
    }

    #[test]
    fn unknown_site_has_no_url() {
        assert_eq!(format_search_url("laptop", "unknown_site"), None);
    }
}
