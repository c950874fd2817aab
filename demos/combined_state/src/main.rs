use crate::tracing_setup::tracing_init;
use fetchduck::{fn_reducer, thunk_creator, with_fetch, FetchAction, ResourceState, StateStore};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

mod tracing_setup;

#[derive(Debug, Clone, PartialEq)]
struct Profile {
    user: String,
    karma: i64,
}

type ProfileAction = FetchAction<Profile, String>;
type ProfileState = ResourceState<Profile, String, (u32, Option<String>)>;

async fn call_profile_api(user: &'static str) -> Result<Profile, String> {
    sleep(Duration::from_millis(150)).await;
    Ok(Profile {
        user: user.to_string(),
        karma: 42,
    })
}

#[tokio::main]
async fn main() {
    tracing_init();

    info!("==========================================");
    warn!("demo: fetch slice combined with extra reducers");

    let requests_seen = fn_reducer(|count: u32, action: &ProfileAction| {
        if action.is_request() {
            count + 1
        } else {
            count
        }
    });
    let last_action =
        fn_reducer(|_: Option<String>, action: &ProfileAction| Some(action.type_id()));

    let reducer = with_fetch::<Profile, String>("profile").combine((requests_seen, last_action));
    let store = StateStore::new(ProfileState::default(), reducer);

    let thunk = thunk_creator("profile", call_profile_api);
    let dispatcher = store.dispatcher();
    thunk.run("ada", |action| dispatcher.dispatch(action)).await;
    thunk.run("ada", |action| dispatcher.dispatch(action)).await;

    let state = store.await_state().await.expect("store task stopped");
    info!("  Main thread | profile: {:?}", state.fetch.data);
    info!("  Main thread | requests seen: {}", state.extras.0);
    info!("  Main thread | last action: {:?}", state.extras.1);

    info!("==========================================");
    info!("  Main thread | Finish");
}
