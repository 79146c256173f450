//! End-to-end quotes replayed from recorded API responses.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use nzpost_rates::application::settings::DEFAULT_BASE_URL;
use nzpost_rates::domain::errors::NON_NZ_ORIGIN_MESSAGE;
use nzpost_rates::infrastructure::transport::{InMemoryTransport, LICENSE_KEY_HEADER};
use nzpost_rates::{
    CarrierSettings, CountryCode, CurrencyCode, HttpRateTransport, Location, Package,
    QuoteOptions, QuoteResult, RateQuoteAssembler,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "91833337";

const DOMESTIC_BOOK: &str = include_str!("fixtures/domestic_book.json");
const DOMESTIC_POSTER: &str = include_str!("fixtures/domestic_poster.json");
const DOMESTIC_SMALL_HALF_POUND: &str = include_str!("fixtures/domestic_small_half_pound.json");
const DOMESTIC_DEFAULT: &str = include_str!("fixtures/domestic_default.json");
const DOMESTIC_ERROR: &str = include_str!("fixtures/domestic_error.json");
const INTERNATIONAL_BOOK: &str = include_str!("fixtures/international_book.json");
const INTERNATIONAL_SMALL_HALF_POUND: &str =
    include_str!("fixtures/international_small_half_pound.json");
const INTERNATIONAL_WII: &str = include_str!("fixtures/international_wii.json");

const DOMESTIC_BOOK_URL: &str = "http://shippingoptions-nzpg.au.cloudhub.io/v1/domestic?account_number=91833337&delivery_address_post_code=1010&delivery_address_suburb=Auckland&height=2&length=19&pickup_address_post_code=6011&pickup_address_suburb=Te+Aro&weight=1&width=14";
const INTERNATIONAL_BOOK_URL: &str = "http://shippingoptions-nzpg.au.cloudhub.io/v1/international?account_number=91833337&delivery_country=CA&height=2&length=19&value=0&weight=1&width=14";

fn d(value: i64) -> Decimal {
    Decimal::from(value)
}

fn wellington() -> Location {
    Location::builder()
        .country(CountryCode::new_zealand())
        .city("Wellington")
        .address1("85 Victoria Street")
        .address2("Te Aro")
        .postal_code("6011")
        .build()
}

fn auckland() -> Location {
    Location::builder()
        .country(CountryCode::new_zealand())
        .city("Auckland")
        .address1("123 Queen Street")
        .address2("Auckland")
        .postal_code("1010")
        .build()
}

fn ottawa() -> Location {
    Location::builder()
        .country(CountryCode::new("CA").unwrap())
        .province("ON")
        .city("Ottawa")
        .address1("110 Laurier Avenue West")
        .postal_code("K1P 1J1")
        .build()
}

fn book() -> Package {
    Package::builder(d(250))
        .dimensions([d(14), d(19), d(2)])
        .build()
        .unwrap()
}

fn poster() -> Package {
    Package::builder(d(100))
        .dimensions([d(93), d(10)])
        .cylinder()
        .build()
        .unwrap()
}

fn small_half_pound() -> Package {
    Package::builder(d(8))
        .dimensions([d(1), d(1), d(1)])
        .imperial()
        .build()
        .unwrap()
}

fn wii(currency: &str) -> Package {
    Package::builder(Decimal::new(75, 1) * d(16))
        .dimensions([d(15), d(10), Decimal::new(45, 1)])
        .imperial()
        .value(26999)
        .currency(CurrencyCode::new(currency).unwrap())
        .build()
        .unwrap()
}

fn just_zero_grams() -> Package {
    Package::builder(Decimal::ZERO).build().unwrap()
}

async fn quote(
    bodies: &[&str],
    origin: &Location,
    destination: &Location,
    packages: &[Package],
) -> (QuoteResult, Vec<String>) {
    let transport = InMemoryTransport::with_bodies(bodies.iter().copied());
    let assembler = RateQuoteAssembler::new(
        CarrierSettings::new(ACCOUNT),
        Arc::new(transport.clone()),
    );
    let result = assembler
        .quote(origin, destination, packages, &QuoteOptions::new().with_test(true))
        .await;
    let urls = transport.requested_urls().await;
    (result, urls)
}

fn prices(result: &QuoteResult) -> Vec<i64> {
    result.rates().iter().map(|r| r.price()).collect()
}

#[tokio::test]
async fn domestic_book_request_and_response() {
    let (result, urls) = quote(&[DOMESTIC_BOOK], &wellington(), &auckland(), &[book()]).await;

    assert_eq!(urls, [DOMESTIC_BOOK_URL]);
    assert!(result.is_success());
    assert!(result.is_test());
    assert_eq!(prices(&result), [958]);
    assert_eq!(result.request(), [DOMESTIC_BOOK_URL]);
    assert_eq!(result.raw_responses(), [DOMESTIC_BOOK]);
    assert_eq!(
        result.responses(),
        [serde_json::from_str::<serde_json::Value>(DOMESTIC_BOOK).unwrap()]
    );
}

#[tokio::test]
async fn domestic_poster_is_quoted_as_cylinder() {
    let (result, urls) = quote(&[DOMESTIC_POSTER], &wellington(), &auckland(), &[poster()]).await;

    assert_eq!(
        urls,
        ["http://shippingoptions-nzpg.au.cloudhub.io/v1/domestic?account_number=91833337&delivery_address_post_code=1010&delivery_address_suburb=Auckland&diameter=10&length=93&pickup_address_post_code=6011&pickup_address_suburb=Te+Aro&weight=1"]
    );
    assert_eq!(prices(&result), [958]);
}

#[tokio::test]
async fn domestic_combined_keeps_shared_service() {
    let (result, urls) = quote(
        &[DOMESTIC_BOOK, DOMESTIC_SMALL_HALF_POUND],
        &wellington(),
        &auckland(),
        &[book(), small_half_pound()],
    )
    .await;

    assert_eq!(
        urls,
        [
            DOMESTIC_BOOK_URL,
            "http://shippingoptions-nzpg.au.cloudhub.io/v1/domestic?account_number=91833337&delivery_address_post_code=1010&delivery_address_suburb=Auckland&height=3&length=3&pickup_address_post_code=6011&pickup_address_suburb=Te+Aro&weight=1&width=3",
        ]
    );
    assert_eq!(prices(&result), [1916]);
    assert_eq!(result.rates()[0].service_code(), "CPOLP");
    assert_eq!(result.rates()[0].service_name(), "CP Online Parcel");
}

#[tokio::test]
async fn domestic_blank_package_is_billed_at_minimums() {
    let (result, urls) = quote(
        &[DOMESTIC_DEFAULT],
        &wellington(),
        &auckland(),
        &[just_zero_grams()],
    )
    .await;

    assert_eq!(
        urls,
        ["http://shippingoptions-nzpg.au.cloudhub.io/v1/domestic?account_number=91833337&delivery_address_post_code=1010&delivery_address_suburb=Auckland&height=1&length=1&pickup_address_post_code=6011&pickup_address_suburb=Te+Aro&weight=1&width=1"]
    );
    assert_eq!(prices(&result), [958]);
}

#[tokio::test]
async fn domestic_error_is_reported_verbatim() {
    let (result, _) = quote(&[DOMESTIC_ERROR], &wellington(), &auckland(), &[book()]).await;

    assert!(!result.is_success());
    assert_eq!(result.message(), "Weight can only be between 0 and 25kg");
    assert!(result.rates().is_empty());
    assert_eq!(result.raw_responses(), [DOMESTIC_ERROR]);
    assert_eq!(result.responses().len(), 1);
}

#[tokio::test]
async fn international_book_request() {
    let (result, urls) = quote(&[INTERNATIONAL_BOOK], &wellington(), &ottawa(), &[book()]).await;

    assert_eq!(urls, [INTERNATIONAL_BOOK_URL]);
    assert_eq!(result.request(), [INTERNATIONAL_BOOK_URL]);
    assert_eq!(result.rates().len(), 4);
}

#[tokio::test]
async fn international_declared_value_depends_on_currency() {
    let (_, nzd_urls) = quote(&[INTERNATIONAL_WII], &wellington(), &ottawa(), &[wii("NZD")]).await;
    assert_eq!(
        nzd_urls,
        ["http://shippingoptions-nzpg.au.cloudhub.io/v1/international?account_number=91833337&delivery_country=CA&height=12&length=39&value=269&weight=4&width=26"]
    );

    let (_, gbp_urls) = quote(&[INTERNATIONAL_WII], &wellington(), &ottawa(), &[wii("GBP")]).await;
    assert_eq!(
        gbp_urls,
        ["http://shippingoptions-nzpg.au.cloudhub.io/v1/international?account_number=91833337&delivery_country=CA&height=12&length=39&value=0&weight=4&width=26"]
    );
}

#[tokio::test]
async fn international_combined_response() {
    let (result, _) = quote(
        &[INTERNATIONAL_BOOK, INTERNATIONAL_SMALL_HALF_POUND],
        &wellington(),
        &ottawa(),
        &[book(), small_half_pound()],
    )
    .await;

    assert!(result.is_success());
    assert_eq!(prices(&result), [19304, 12736, 7406, 6668]);
    let codes: Vec<&str> = result.rates().iter().map(|r| r.service_code()).collect();
    assert_eq!(codes, ["ICPNDNA1", "IEZPDNA1", "IACNDNA1", "IECNDNA1"]);
    let names: Vec<&str> = result.rates().iter().map(|r| r.service_name()).collect();
    assert_eq!(
        names,
        [
            "Int Express Pcl Zone D 1.0kg",
            "Int Econ Cour Pcl Zn D 1.0kg",
            "Zone D AirPost Cust Pcl 1.0kg",
            "Zone D EconomyPost Pcl 1.0kg",
        ]
    );
}

#[tokio::test]
async fn international_disjoint_services_yield_no_rates() {
    let (result, _) = quote(
        &[INTERNATIONAL_BOOK, INTERNATIONAL_WII],
        &wellington(),
        &ottawa(),
        &[book(), wii("NZD")],
    )
    .await;

    assert!(result.is_success());
    assert!(result.rates().is_empty());
}

#[tokio::test]
async fn empty_body_fails_without_responses() {
    let (result, _) = quote(&[""], &wellington(), &ottawa(), &[book()]).await;

    assert!(!result.is_success());
    assert!(!result.message().is_empty());
    assert_eq!(result.raw_responses(), [""]);
    assert!(result.responses().is_empty());
}

#[tokio::test]
async fn invalid_json_fails_with_parser_message() {
    let (result, _) = quote(&["<>"], &wellington(), &ottawa(), &[book()]).await;

    let expected = serde_json::from_str::<serde_json::Value>("<>")
        .unwrap_err()
        .to_string();
    assert!(!result.is_success());
    assert_eq!(result.message(), expected);
    assert_eq!(result.raw_responses(), ["<>"]);
    assert!(result.responses().is_empty());
}

#[tokio::test]
async fn international_from_abroad_is_rejected() {
    let (result, urls) = quote(&[], &ottawa(), &wellington(), &[book()]).await;

    assert!(!result.is_success());
    assert_eq!(result.message(), NON_NZ_ORIGIN_MESSAGE);
    assert!(result.raw_responses().is_empty());
    assert_eq!(result.request().len(), 1);
    assert!(result.responses().is_empty());
    assert!(urls.is_empty());
}

#[tokio::test]
async fn http_transport_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/domestic"))
        .and(header(LICENSE_KEY_HEADER, "test-license"))
        .and(query_param("account_number", ACCOUNT))
        .and(query_param("pickup_address_suburb", "Te Aro"))
        .and(query_param("weight", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DOMESTIC_BOOK))
        .expect(1)
        .mount(&server)
        .await;

    let settings = CarrierSettings::new(ACCOUNT).with_base_url(format!("{}/v1", server.uri()));
    let transport = HttpRateTransport::new("test-license", 5_000).unwrap();
    let assembler = RateQuoteAssembler::new(settings, Arc::new(transport));

    let result = assembler
        .quote(&wellington(), &auckland(), &[book()], &QuoteOptions::default())
        .await;

    assert!(result.is_success(), "{}", result.message());
    assert_eq!(prices(&result), [958]);
    assert!(result.request()[0].starts_with(&server.uri()));
    assert!(!result.request()[0].starts_with(DEFAULT_BASE_URL));
}

#[tokio::test]
async fn http_status_failure_becomes_failed_quote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid license key"))
        .mount(&server)
        .await;

    let settings = CarrierSettings::new(ACCOUNT).with_base_url(format!("{}/v1", server.uri()));
    let transport = HttpRateTransport::new("wrong", 5_000).unwrap();
    let assembler = RateQuoteAssembler::new(settings, Arc::new(transport));

    let result = assembler
        .quote(&wellington(), &ottawa(), &[book()], &QuoteOptions::default())
        .await;

    assert!(!result.is_success());
    assert!(result.message().contains("invalid license key"));
    assert_eq!(result.request().len(), 1);
    assert!(result.raw_responses().is_empty());
}
