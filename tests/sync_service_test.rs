//! Sync service unit tests against mocked source and store clients.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;

use cvdw_sync::domain::{Broker, BrokerPage};
use cvdw_sync::errors::{AppError, AppResult};
use cvdw_sync::infra::{BrokerSource, BrokerStore};
use cvdw_sync::services::{SyncOptions, SyncService, Synchronizer};

mock! {
    Source {}

    #[async_trait]
    impl BrokerSource for Source {
        async fn fetch_page(&self, page: u64) -> AppResult<BrokerPage>;
    }
}

mock! {
    Store {}

    #[async_trait]
    impl BrokerStore for Store {
        async fn upsert_batch(&self, table: &str, records: &[Broker]) -> AppResult<()>;
    }
}

fn make_broker(id: u64) -> Broker {
    Broker {
        idcorretor: id.to_string(),
        ativo_login: "1".to_string(),
        nome: format!("Corretor {id}"),
        documento: String::new(),
        data_cad: "2023-05-11 09:14:02".to_string(),
        idimobiliaria: "17".to_string(),
    }
}

fn make_page(total_pages: u64, ids: std::ops::Range<u64>) -> BrokerPage {
    BrokerPage {
        total_pages,
        records: ids.map(make_broker).collect(),
    }
}

fn options(batch_size: usize) -> SyncOptions {
    SyncOptions {
        table: "d_Corretores".to_string(),
        batch_size,
        page_pause: Duration::ZERO,
        max_pages: None,
    }
}

fn synchronizer(source: MockSource, store: MockStore, options: SyncOptions) -> Synchronizer {
    Synchronizer::new(Arc::new(source), Arc::new(store), options)
}

#[tokio::test]
async fn single_page_syncs_in_one_batch() {
    let mut source = MockSource::new();
    source
        .expect_fetch_page()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(make_page(1, 0..3)));

    let mut store = MockStore::new();
    store
        .expect_upsert_batch()
        .withf(|table, records| table == "d_Corretores" && records.len() == 3)
        .times(1)
        .returning(|_, _| Ok(()));

    let service = synchronizer(source, store, options(100));
    let report = service.run().await.unwrap();

    assert_eq!(report.pages, 1);
    assert_eq!(report.fetched, 3);
    assert_eq!(report.written, 3);
    assert_eq!(report.failed_batches, 0);
}

#[tokio::test]
async fn every_page_is_fetched_exactly_once() {
    let mut source = MockSource::new();
    source
        .expect_fetch_page()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(make_page(3, 0..2)));
    source
        .expect_fetch_page()
        .with(eq(2))
        .times(1)
        .returning(|_| Ok(make_page(3, 2..4)));
    source
        .expect_fetch_page()
        .with(eq(3))
        .times(1)
        .returning(|_| Ok(make_page(3, 4..5)));

    let mut store = MockStore::new();
    store
        .expect_upsert_batch()
        .times(1)
        .returning(|_, _| Ok(()));

    let service = synchronizer(source, store, options(100));
    let report = service.run().await.unwrap();

    assert_eq!(report.pages, 3);
    assert_eq!(report.fetched, 5);
    assert_eq!(report.written, 5);
}

#[tokio::test]
async fn records_are_written_in_batch_size_chunks() {
    let mut source = MockSource::new();
    source
        .expect_fetch_page()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(make_page(1, 0..5)));

    let batch_sizes = Arc::new(Mutex::new(Vec::new()));
    let seen = batch_sizes.clone();

    let mut store = MockStore::new();
    store
        .expect_upsert_batch()
        .times(3)
        .returning(move |_, records| {
            seen.lock().unwrap().push(records.len());
            Ok(())
        });

    let service = synchronizer(source, store, options(2));
    let report = service.run().await.unwrap();

    assert_eq!(report.written, 5);
    assert_eq!(*batch_sizes.lock().unwrap(), vec![2, 2, 1]);
}

#[tokio::test]
async fn failed_batch_does_not_stop_later_batches() {
    let mut source = MockSource::new();
    source
        .expect_fetch_page()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(make_page(1, 0..6)));

    let calls = Arc::new(Mutex::new(0usize));
    let counter = calls.clone();

    let mut store = MockStore::new();
    store
        .expect_upsert_batch()
        .times(3)
        .returning(move |_, _| {
            let mut n = counter.lock().unwrap();
            *n += 1;
            if *n == 2 {
                Err(AppError::store("duplicate key value"))
            } else {
                Ok(())
            }
        });

    let service = synchronizer(source, store, options(2));
    let result = service.run().await;

    // All three batches were attempted (enforced by times(3) above), but the
    // run as a whole reports failure.
    assert!(matches!(result, Err(AppError::Store(_))));
}

#[tokio::test]
async fn source_failure_aborts_before_any_write() {
    let mut source = MockSource::new();
    source.expect_fetch_page().with(eq(1)).times(1).returning(|_| {
        Err(AppError::HttpStatus {
            status: 500,
            url: "https://example.test/corretores".to_string(),
        })
    });

    // No expectations on the store: any upsert call would panic the test.
    let store = MockStore::new();

    let service = synchronizer(source, store, options(100));
    let result = service.run().await;

    assert!(matches!(result, Err(AppError::HttpStatus { status: 500, .. })));
}

#[tokio::test]
async fn failed_run_is_a_single_invocation_attempt() {
    // times(1) on the source enforces that the service itself never retries
    // a failed run; retry policy lives below it, in the transport layer.
    let mut source = MockSource::new();
    source
        .expect_fetch_page()
        .times(1)
        .returning(|_| Err(AppError::api("malformed envelope")));

    let store = MockStore::new();
    let service = synchronizer(source, store, options(100));

    assert!(service.run().await.is_err());
}

#[tokio::test]
async fn max_pages_caps_pagination() {
    let mut source = MockSource::new();
    source
        .expect_fetch_page()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(make_page(10, 0..2)));
    source
        .expect_fetch_page()
        .with(eq(2))
        .times(1)
        .returning(|_| Ok(make_page(10, 2..4)));

    let mut store = MockStore::new();
    store
        .expect_upsert_batch()
        .times(1)
        .returning(|_, _| Ok(()));

    let opts = options(100).with_max_pages(Some(2));
    let service = synchronizer(source, store, opts);
    let report = service.run().await.unwrap();

    assert_eq!(report.pages, 2);
    assert_eq!(report.fetched, 4);
}

#[tokio::test]
async fn empty_result_set_writes_nothing() {
    let mut source = MockSource::new();
    source
        .expect_fetch_page()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(make_page(1, 0..0)));

    // Store must not be called for an empty result set.
    let store = MockStore::new();

    let service = synchronizer(source, store, options(100));
    let report = service.run().await.unwrap();

    assert_eq!(report.fetched, 0);
    assert_eq!(report.written, 0);
}
