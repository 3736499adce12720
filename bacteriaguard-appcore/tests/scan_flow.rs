use std::sync::Arc;
use std::time::Duration;

use bacteriaguard_appcore::AppService;
use bacteriaguard_core::config::AppConfig;
use bacteriaguard_core::outcome::outcome_catalog;
use bacteriaguard_engine::session::ScanStatus;
use bacteriaguard_platform::test::{MemoryNotifier, RecordingSink, ScriptedRandom};
use bacteriaguard_runtime::clock::TokioClock;
use bacteriaguard_runtime::random::SeededRandom;

fn service(random: Arc<dyn bacteriaguard_engine::traits::RandomSource>) -> (AppService, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let svc = AppService::new(
        AppConfig::default(),
        Arc::new(TokioClock),
        random,
        sink.clone(),
        Arc::new(MemoryNotifier::default()),
    );
    (svc, sink)
}

#[tokio::test(start_paused = true)]
async fn eleven_simulated_seconds_reach_complete() {
    let (svc, sink) = service(ScriptedRandom::always(0).boxed());
    let ctl = svc.controller();

    ctl.start_scan().await;
    ctl.connect_scanner().await;

    tokio::time::sleep(Duration::from_millis(10_900)).await;
    let s = svc.scan_status().await;
    assert_eq!(s.status, ScanStatus::Processing);
    assert!(s.result.is_none());

    tokio::time::sleep(Duration::from_millis(200)).await;
    let s = svc.scan_status().await;
    assert_eq!(s.status, ScanStatus::Complete);
    assert_eq!(s.progress, 100);
    assert_eq!(s.result.as_ref(), Some(&outcome_catalog()[0]));

    let progress: Vec<u8> = sink.snapshot().iter().map(|p| p.progress).collect();
    assert!(progress.windows(2).all(|w| w[0] <= w[1]), "{progress:?}");
    assert!(
        sink.snapshot()
            .iter()
            .all(|p| p.result.is_some() == (p.status == ScanStatus::Complete))
    );
}

#[tokio::test(start_paused = true)]
async fn seeded_services_agree() {
    let mut picks = Vec::new();
    for _ in 0..2 {
        let (svc, _sink) = service(Arc::new(SeededRandom::new(2024)));
        let mut run = Vec::new();
        for _ in 0..5 {
            let done = svc.scan_to_completion().await.unwrap();
            run.push(done.result.unwrap().classification);
            svc.controller().new_scan().await;
        }
        picks.push(run);
    }
    assert_eq!(picks[0], picks[1]);
}

#[tokio::test(start_paused = true)]
async fn cancel_then_rescan_completes_normally() {
    let (svc, _sink) = service(ScriptedRandom::new(vec![1, 2]).boxed());
    let ctl = svc.controller();

    ctl.start_scan().await;
    ctl.connect_scanner().await;
    tokio::time::sleep(Duration::from_millis(6000)).await;
    assert_eq!(svc.scan_status().await.status, ScanStatus::Scanning);
    ctl.cancel_scan().await;

    let done = svc.scan_to_completion().await.unwrap();
    assert_eq!(done.status, ScanStatus::Complete);
    // The cancelled run never reached the pick.
    assert_eq!(done.result.as_ref(), Some(&outcome_catalog()[1]));
}
