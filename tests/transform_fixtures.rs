// tests/transform_fixtures.rs
//
// Captured-shape TBA payloads through the transformers, no network.
//
use tba_csv::config::options::ScheduleOptions;
use tba_csv::csv::rows_to_string;
use tba_csv::specs::{Match, ScoredMatch, Team};
use tba_csv::transform::{breakdown_rows, schedule_rows, team_rows};

const MATCHES: &str = include_str!("fixtures/matches_2022cala.json");
const TEAMS: &str = include_str!("fixtures/teams_2022cala.json");

fn matches() -> Vec<Match> {
    serde_json::from_str(MATCHES).unwrap()
}

#[test]
fn schedule_keeps_qualifications_sorted() {
    let out = rows_to_string(&schedule_rows(matches(), &ScheduleOptions::default()), ',');
    assert_eq!(
        out,
        "1,8,971,604,254,5940,1678\n\
         2,1678,254,971,604,5940,8\n\
         3,254,8,5940,971,604,1678\n"
    );
}

#[test]
fn schedule_blue_first_without_numbers() {
    let opts = ScheduleOptions { blue_first: true, hide_numbers: true, ..Default::default() };
    let out = rows_to_string(&schedule_rows(matches(), &opts), ',');
    assert_eq!(
        out,
        "254,5940,1678,8,971,604\n\
         604,5940,8,1678,254,971\n\
         971,604,1678,254,8,5940\n"
    );
}

#[test]
fn schedule_row_count_matches_qm_count() {
    let all = matches();
    let qm = all.iter().filter(|m| m.comp_level == "qm").count();
    let rows = schedule_rows(all, &ScheduleOptions { keep_prefix: true, ..Default::default() });
    assert_eq!(rows.len(), qm);

    let numbers: Vec<u32> = rows.iter().map(|r| r[0].parse().unwrap()).collect();
    assert!(numbers.windows(2).all(|w| w[0] <= w[1]));
    assert!(rows.iter().all(|r| r[1..].iter().all(|k| k.starts_with("frc"))));
}

#[test]
fn teams_sorted_by_number() {
    let teams: Vec<Team> = serde_json::from_str(TEAMS).unwrap();
    let out = rows_to_string(&team_rows(teams), ',');
    assert_eq!(
        out,
        "8,Paly Robotics\n\
         254,The Cheesy Poofs\n\
         604,Quixilver\n\
         971,Spartan Robotics\n\
         1678,Citrus Circuits\n\
         5940,BREAD\n"
    );
}

#[test]
fn breakdown_tables() {
    let scored: Vec<ScoredMatch> = serde_json::from_str(MATCHES).unwrap();
    let rows = breakdown_rows(&scored);

    // 6 headers; 3 played matches × 6 stations; the unplayed qm3 is skipped
    assert_eq!(rows.len(), 6 + 3 * 6);

    let lines: Vec<String> = rows.iter().map(|r| r.join(",")).collect();
    assert_eq!(
        &lines[..4],
        [
            "Matches,Red 1,AUT_TAXI,TOP_CL,CV_ATP,CV_ACT,CV_TCT,CV_QT,CV_FOUL,CV_TFOUL,CV_RP,CV_FP,CV_SCORE",
            "2,1678,Taxi,Traversal,6,24,True,0,0,4,0,150",
            "1,1,Did not move,None,0,0,False,0,0,0,0,10",
            "1,8,Did not move,Mid,2,9,False,1,0,1,4,61",
        ]
    );
    assert_eq!(
        &lines[20..],
        [
            "Matches,Blue 3,AUT_TAXI,TOP_CL,CV_ATP,CV_ACT,CV_TCT,CV_QT,CV_FOUL,CV_TFOUL,CV_RP,CV_FP,CV_SCORE",
            "2,8,Taxi,Mid,3,12,False,2,1,0,12,88",
            "1,6,Did not move,None,0,0,False,0,0,0,0,20",
            "1,1678,Taxi,Traversal,5,20,True,0,0,3,4,97",
        ]
    );

    // Alliance score is shared by every station on that side
    for (header_at, score) in [(0, "150"), (4, "150"), (8, "150")] {
        assert_eq!(rows[header_at + 1].last().map(String::as_str), Some(score));
    }
}
