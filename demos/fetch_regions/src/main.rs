use crate::tracing_setup::tracing_init;
use fetchduck::{thunk_creator, with_fetch, FetchAction, FetchState, FetchStreamExt, StateStore};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

mod tracing_setup;

#[derive(Debug, Clone, PartialEq)]
struct Region {
    id: u32,
    name: String,
}

#[derive(Debug, Clone)]
struct Response {
    data: Vec<Region>,
}

type RegionsState = FetchState<Vec<Region>, String>;
type RegionsStore = StateStore<RegionsState, FetchAction<Vec<Region>, String>>;

async fn call_regions_api(fail: bool) -> Result<Response, String> {
    sleep(Duration::from_millis(200)).await;
    if fail {
        return Err("503 service unavailable".to_string());
    }
    Ok(Response {
        data: vec![
            Region {
                id: 1,
                name: "Metropolitana".to_string(),
            },
            Region {
                id: 2,
                name: "Antofagasta".to_string(),
            },
        ],
    })
}

#[tokio::main]
async fn main() {
    tracing_init();

    let thunk =
        thunk_creator("regions", call_regions_api).with_data_selector(|res: Response| res.data);

    info!("==========================================");
    warn!("demo: fetch resolves");

    let store: RegionsStore = StateStore::new(FetchState::default(), with_fetch("regions"));
    let dispatcher = store.dispatcher();
    thunk.run(false, |action| dispatcher.dispatch(action)).await;

    let settled = store
        .to_stream()
        .first_match(|state: &RegionsState| state.is_settled())
        .await;
    info!("  Main thread | settled state: {:?}", settled);

    info!("==========================================");
    warn!("demo: fetch rejects");

    let store: RegionsStore = StateStore::new(FetchState::default(), with_fetch("regions"));
    let dispatcher = store.dispatcher();
    thunk.run(true, |action| dispatcher.dispatch(action)).await;

    let settled = store
        .to_stream()
        .first_match(|state: &RegionsState| state.is_settled())
        .await;
    info!("  Main thread | settled state: {:?}", settled);

    info!("==========================================");
    info!("  Main thread | Finish");
}
