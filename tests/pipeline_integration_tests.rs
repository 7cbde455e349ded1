use nba_team_stats::{
    aggregator::{
        ADVANCED_VIEW_SCHEMA, PipelineOutcome, Stage, StatColumn, StatsTable, TEAM_STATS_SCHEMA,
        TeamRow, advanced_only_view, aggregate_team_stats,
    },
    config::Config,
    data_fetcher::api::create_http_client_with_timeout,
    data_fetcher::models::{Season, SeasonType},
    display::render_table,
    testing_utils::{TestDataBuilder, stats_response_body},
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn config(server: &MockServer) -> Config {
    Config {
        api_base_url: server.uri(),
        ..Config::default()
    }
}

fn season() -> Season {
    Season::parse("2024-25").unwrap()
}

fn ok(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

async fn mount_general(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/leaguedashteamstats"))
        .and(query_param("MeasureType", "Base"))
        .and(query_param("Location", ""))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_advanced(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/leaguedashteamstats"))
        .and(query_param("MeasureType", "Advanced"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_home_split(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/leaguedashteamstats"))
        .and(query_param("MeasureType", "Base"))
        .and(query_param("Location", "Home"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn run_pipeline(server: &MockServer, season_type: SeasonType) -> PipelineOutcome {
    let client = create_http_client_with_timeout(5).unwrap();
    aggregate_team_stats(&client, &config(server), &season(), season_type).await
}

fn team<'a>(table: &'a StatsTable, name: &str) -> &'a TeamRow {
    table.rows().iter().find(|r| r.team == name).unwrap()
}

fn team_order(table: &StatsTable) -> Vec<&str> {
    table.rows().iter().map(|r| r.team.as_str()).collect()
}

fn has_at_most_one_decimal(value: f64) -> bool {
    let scaled = value * 10.0;
    (scaled - scaled.round()).abs() < 1e-6
}

/// All three queries succeed: every output column is present
#[tokio::test]
async fn test_full_pipeline_builds_complete_table() {
    let server = MockServer::start().await;
    mount_general(&server, ok(TestDataBuilder::general_body())).await;
    mount_advanced(&server, ok(TestDataBuilder::advanced_body())).await;
    mount_home_split(&server, ok(TestDataBuilder::home_split_body())).await;

    let outcome = run_pipeline(&server, SeasonType::RegularSeason).await;
    assert!(outcome.warnings().is_empty());
    let table = outcome.into_table();

    assert_eq!(table.columns(), &TEAM_STATS_SCHEMA);
    assert_eq!(table.len(), 3);
    assert_eq!(team_order(&table), vec!["Team B", "Team A", "Team C"]);

    let a = team(&table, "Team A");
    assert_eq!(a.home_games, Some(20));
    assert_eq!(a.home_wins, Some(15));
    assert_eq!(a.away_games, Some(20));
    assert_eq!(a.away_wins, Some(10));
    assert_eq!(a.points_allowed, Some(106.5));

    let b = team(&table, "Team B");
    assert_eq!(b.off_rating, Some(118.7));
    assert_eq!(b.points_per_game, Some(117.5));
    assert_eq!(b.away_games, Some(20));
    assert_eq!(b.away_wins, Some(13));
}

/// Every float in the output carries at most one decimal
#[tokio::test]
async fn test_full_pipeline_rounds_for_display() {
    let server = MockServer::start().await;
    mount_general(&server, ok(TestDataBuilder::general_body())).await;
    mount_advanced(&server, ok(TestDataBuilder::advanced_body())).await;
    mount_home_split(&server, ok(TestDataBuilder::home_split_body())).await;

    let table = run_pipeline(&server, SeasonType::RegularSeason)
        .await
        .into_table();

    for row in table.rows() {
        for column in [
            StatColumn::OffRating,
            StatColumn::DefRating,
            StatColumn::Pace,
            StatColumn::PointsPerGame,
            StatColumn::PointsAllowed,
        ] {
            let value = row.metric(column).unwrap();
            assert!(has_at_most_one_decimal(value), "{column:?} = {value}");
        }
    }
}

/// A failing home split drops the four home/away columns and warns
#[tokio::test]
async fn test_home_split_failure_degrades() {
    let server = MockServer::start().await;
    mount_general(&server, ok(TestDataBuilder::general_body())).await;
    mount_advanced(&server, ok(TestDataBuilder::advanced_body())).await;
    mount_home_split(&server, ResponseTemplate::new(500).set_body_string("boom")).await;

    let outcome = run_pipeline(&server, SeasonType::RegularSeason).await;

    assert_eq!(outcome.warnings().len(), 1);
    assert_eq!(outcome.warnings()[0].stage, Stage::HomeSplit);

    let table = outcome.into_table();
    assert_eq!(table.len(), 3);
    for column in [
        StatColumn::HomeGames,
        StatColumn::HomeWins,
        StatColumn::AwayGames,
        StatColumn::AwayWins,
    ] {
        assert!(!table.has_column(column));
    }
    assert!(table.has_column(StatColumn::OffRating));
    assert_eq!(team_order(&table), vec!["Team B", "Team A", "Team C"]);
}

/// A home split without games/wins columns is treated like a failed one
#[tokio::test]
async fn test_home_split_with_wrong_shape_degrades() {
    let server = MockServer::start().await;
    mount_general(&server, ok(TestDataBuilder::general_body())).await;
    mount_advanced(&server, ok(TestDataBuilder::advanced_body())).await;
    mount_home_split(
        &server,
        ok(stats_response_body(
            &["TEAM_ID", "TEAM_NAME"],
            vec![vec![json!(1), json!("Team A")], vec![json!(2), json!("Team B")]],
        )),
    )
    .await;

    let outcome = run_pipeline(&server, SeasonType::RegularSeason).await;

    assert_eq!(outcome.warnings().len(), 1);
    assert_eq!(outcome.warnings()[0].stage, Stage::HomeSplit);

    let table = outcome.into_table();
    assert_eq!(table.len(), 3);
    for column in [
        StatColumn::HomeGames,
        StatColumn::HomeWins,
        StatColumn::AwayGames,
        StatColumn::AwayWins,
    ] {
        assert!(!table.has_column(column));
    }
    assert!(table.rows().iter().all(|r| r.home_games.is_none() && r.away_games.is_none()));
}

/// A failing advanced query leaves a table without ratings, in upstream order
#[tokio::test]
async fn test_advanced_failure_degrades() {
    let server = MockServer::start().await;
    mount_general(&server, ok(TestDataBuilder::general_body())).await;
    mount_advanced(&server, ResponseTemplate::new(503)).await;
    mount_home_split(&server, ok(TestDataBuilder::home_split_body())).await;

    let outcome = run_pipeline(&server, SeasonType::RegularSeason).await;

    assert_eq!(outcome.warnings().len(), 1);
    assert_eq!(outcome.warnings()[0].stage, Stage::Advanced);

    let table = outcome.into_table();
    assert!(!table.has_column(StatColumn::OffRating));
    assert!(!table.has_column(StatColumn::DefRating));
    assert!(!table.has_column(StatColumn::Pace));
    assert!(table.has_column(StatColumn::AwayWins));
    assert_eq!(team_order(&table), vec!["Team A", "Team B", "Team C"]);
}

/// Playoffs that have not started come back as an empty result set
#[tokio::test]
async fn test_empty_primary_result_is_no_data_yet() {
    let server = MockServer::start().await;
    mount_general(&server, ok(TestDataBuilder::empty_body())).await;

    let outcome = run_pipeline(&server, SeasonType::Playoffs).await;

    assert!(matches!(outcome, PipelineOutcome::NoDataYet));
    assert!(outcome.into_table().is_empty());
}

/// A failing primary query is an error, not an empty season
#[tokio::test]
async fn test_primary_failure_is_reported_with_stage() {
    let server = MockServer::start().await;
    mount_general(&server, ResponseTemplate::new(500).set_body_string("down")).await;

    match run_pipeline(&server, SeasonType::RegularSeason).await {
        PipelineOutcome::Failed { stage, error } => {
            assert_eq!(stage, Stage::General);
            assert!(error.to_string().contains("500"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

/// The rendered table contains every selected column for every team
#[tokio::test]
async fn test_rendered_table_lists_all_teams_in_order() {
    let server = MockServer::start().await;
    mount_general(&server, ok(TestDataBuilder::general_body())).await;
    mount_advanced(&server, ok(TestDataBuilder::advanced_body())).await;
    mount_home_split(&server, ok(TestDataBuilder::home_split_body())).await;

    let table = run_pipeline(&server, SeasonType::RegularSeason)
        .await
        .into_table();
    let text = render_table(&table);
    let lines: Vec<&str> = text.lines().collect();

    for column in TEAM_STATS_SCHEMA {
        assert!(lines[0].contains(column.label()));
    }
    assert!(lines[1].starts_with("Team B"));
    assert!(lines[2].starts_with("Team A"));
    assert!(lines[3].starts_with("Team C"));
}

/// Advanced-only view: three columns besides the team, sorted by net rating
#[tokio::test]
async fn test_advanced_only_view() {
    let server = MockServer::start().await;
    mount_advanced(&server, ok(TestDataBuilder::advanced_body())).await;
    let client = create_http_client_with_timeout(5).unwrap();

    let outcome =
        advanced_only_view(&client, &config(&server), &season(), SeasonType::RegularSeason).await;
    let table = outcome.into_table();

    assert_eq!(table.columns(), &ADVANCED_VIEW_SCHEMA);
    assert_eq!(team_order(&table), vec!["Team B", "Team A", "Team C"]);
    assert_eq!(team(&table, "Team B").pace, Some(99.9));
    assert_eq!(team(&table, "Team A").pace, Some(98.6));
    assert_eq!(team(&table, "Team C").net_rating, Some(-7.2));
}

/// Advanced-only view keeps "not started" and "failed" apart
#[tokio::test]
async fn test_advanced_only_view_empty_and_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("SeasonType", "Playoffs"))
        .respond_with(ok(TestDataBuilder::empty_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("SeasonType", "Regular Season"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    let client = create_http_client_with_timeout(5).unwrap();
    let config = config(&server);

    let playoffs = advanced_only_view(&client, &config, &season(), SeasonType::Playoffs).await;
    assert!(matches!(playoffs, PipelineOutcome::NoDataYet));

    let regular = advanced_only_view(&client, &config, &season(), SeasonType::RegularSeason).await;
    assert!(matches!(
        regular,
        PipelineOutcome::Failed {
            stage: Stage::Advanced,
            ..
        }
    ));
}
