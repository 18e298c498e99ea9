// End-to-end settlement flow: dataset -> in-memory store -> service ->
// HTTP surface.

use actix_web::{test, web, App};
use rust_decimal_macros::dec;

use chrono::NaiveDate;
use lofa_settlement::revenue::controllers::{self, AppRevenueService};
use lofa_settlement::revenue::models::{
    BusinessTaxStandard, CsDisposition, OrderStatus, PartnerProfile, PartnerRevenueStat,
    RawOrderRecord, SellerProfile,
};
use lofa_settlement::revenue::{Dataset, InMemoryOrderRepository, RevenueService};

fn order(day: u32, partner_name: &str, seller: &str, price: i64) -> RawOrderRecord {
    RawOrderRecord {
        order_date: NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(13, 45, 0)
            .unwrap(),
        seller: seller.to_string(),
        partner_name: partner_name.to_string(),
        product_name: "세라믹 화병".to_string(),
        price: price.into(),
        amount: 1,
        order_status: OrderStatus::Delivered,
        cs: CsDisposition::Normal,
        is_discounted: false,
        lofa_discount_levy_rate: None,
        partner_discount_levy_rate: None,
        platform_discount_levy_rate: None,
        lofa_adjustment_fee_rate: None,
        platform_adjustment_fee_rate: None,
    }
}

fn dataset() -> Dataset {
    Dataset {
        orders: vec![
            order(5, "파트너A", "로파", 20000),
            order(12, "파트너A", "오늘의집", 10000),
            order(20, "파트너B", "로파", 50000),
            // Outside any March window used below
            april_order(),
        ],
        partners: vec![
            PartnerProfile {
                provider_name: "파트너A".to_string(),
                lofa_fee_rate: dec!(30),
                other_fee_rate: dec!(40),
                business_tax_standard: BusinessTaxStandard::General,
                product_categories: vec!["리빙".to_string()],
            },
            PartnerProfile {
                provider_name: "파트너B".to_string(),
                lofa_fee_rate: dec!(25),
                other_fee_rate: dec!(35),
                business_tax_standard: BusinessTaxStandard::Exempt,
                product_categories: vec![],
            },
        ],
        sellers: vec![SellerProfile {
            name: "오늘의집".to_string(),
            fee_rate: dec!(20),
        }],
    }
}

fn april_order() -> RawOrderRecord {
    let mut record = order(5, "파트너A", "로파", 999_999);
    record.order_date = NaiveDate::from_ymd_opt(2024, 4, 5)
        .unwrap()
        .and_hms_opt(13, 45, 0)
        .unwrap();
    record
}

fn march() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    )
}

#[::core::prelude::v1::test]
fn test_service_aggregates_window_only() {
    let service = RevenueService::new(InMemoryOrderRepository::from_dataset(dataset()));
    let (start, end) = march();

    let stats = service.get_revenue_stats(start, end).unwrap();
    assert_eq!(stats.len(), 2);

    let a = stats.iter().find(|s| s.partner_name == "파트너A").unwrap();
    // 20000 house + 10000 external; the April order stays out
    assert_eq!(a.lofa_sales_amount, dec!(20000));
    assert_eq!(a.other_sales_amount, dec!(10000));
    assert_eq!(a.total_sales_amount, dec!(30000));
    assert_eq!(a.start_date, "2024-03-01");
    assert_eq!(a.end_date, "2024-03-31");
    assert_eq!(a.product_category, vec!["리빙"]);

    let b = stats.iter().find(|s| s.partner_name == "파트너B").unwrap();
    assert_eq!(b.lofa_sales_amount, dec!(50000));
    // Exempt partner: proceeds pass through untaxed
    assert_eq!(b.net_profit_after_tax, b.proceeds);
}

#[::core::prelude::v1::test]
fn test_service_empty_window_returns_empty_list() {
    let service = RevenueService::new(InMemoryOrderRepository::from_dataset(dataset()));

    let stats = service
        .get_revenue_stats(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        )
        .unwrap();
    assert!(stats.is_empty());
}

#[::core::prelude::v1::test]
fn test_service_aborts_on_bad_discounted_record() {
    let mut data = dataset();
    let mut bad = order(8, "파트너A", "로파", 12000);
    bad.is_discounted = true; // no discount rates present
    data.orders.push(bad);

    let service = RevenueService::new(InMemoryOrderRepository::from_dataset(data));
    let (start, end) = march();

    let err = service.get_revenue_stats(start, end).unwrap_err();
    assert!(err.to_string().contains("세라믹 화병"));
}

#[actix_web::test]
async fn test_http_revenue_stats_happy_path() {
    let service = web::Data::new(AppRevenueService::new(
        InMemoryOrderRepository::from_dataset(dataset()),
    ));
    let app = test::init_service(
        App::new()
            .app_data(service)
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/revenue/stats?start_date=2024-03-01&end_date=2024-03-31")
        .to_request();
    let rows: Vec<PartnerRevenueStat> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r.partner_name == "파트너A"));
}

#[actix_web::test]
async fn test_http_rejects_malformed_dates() {
    let service = web::Data::new(AppRevenueService::new(
        InMemoryOrderRepository::from_dataset(dataset()),
    ));
    let app = test::init_service(
        App::new()
            .app_data(service)
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/revenue/stats?start_date=03-01-2024&end_date=2024-03-31")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_http_surfaces_data_integrity_failures() {
    let mut data = dataset();
    let mut bad = order(8, "파트너A", "로파", 12000);
    bad.is_discounted = true;
    data.orders.push(bad);

    let service = web::Data::new(AppRevenueService::new(
        InMemoryOrderRepository::from_dataset(data),
    ));
    let app = test::init_service(
        App::new()
            .app_data(service)
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/revenue/stats?start_date=2024-03-01&end_date=2024-03-31")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
    );
}
