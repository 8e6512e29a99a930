use anyhow::Result;
use dice_report::config::prompt::open_rolls;
use dice_report::{DicePipeline, LocalStorage, ReportEngine, TomlConfig};
use tempfile::TempDir;

fn run_game(temp_dir: &TempDir, file_name: &str, content: &str, config: TomlConfig) -> Result<String> {
    let base = temp_dir.path().to_string_lossy().into_owned();
    std::fs::write(temp_dir.path().join(file_name), content)?;

    let storage = LocalStorage::new(base);
    let source = open_rolls(&storage, file_name)?;
    let pipeline = DicePipeline::new(storage, config, source);
    Ok(ReportEngine::new(pipeline).run()?)
}

#[test]
fn test_all_sixes_game_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let content = "Six\n".repeat(24);

    let report_path = run_game(&temp_dir, "sixes.txt", &content, TomlConfig::default())?;
    assert_eq!(report_path, "sixes.rpt");

    let report = std::fs::read_to_string(temp_dir.path().join("sixes.rpt"))?;
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[3], format!("Player 1: {}", "Six   ".repeat(6)));
    assert_eq!(lines[9], "Round 1: Player 1 gets a bonus of 5 points.");
    assert_eq!(lines[14], "Round 6: Player 1 gets a bonus of 5 points.");
    assert!(report.contains("Player 1 :  66\nPlayer 3 :  36\n      -----\n Team A 102\n"));
    assert!(report.contains("Player 2 :  36\nPlayer 4 :  36\n      -----\n Team B  72\n"));
    assert!(report.ends_with("\nTeam A wins.\n"));
    Ok(())
}

#[test]
fn test_short_input_defaults_to_one() -> Result<()> {
    let temp_dir = TempDir::new()?;

    run_game(&temp_dir, "short", "two\nfour\nthree\nFive\n", TomlConfig::default())?;

    // No extension on the input: ".rpt" is appended.
    let report = std::fs::read_to_string(temp_dir.path().join("short.rpt"))?;

    assert!(report.contains("Player 1: Two   One   One   One   One   One   \n"));
    assert!(report.contains("Player 4: Five  One   One   One   One   One   \n"));
    assert!(report.contains("Round 1: Player 4 gets a bonus of 5 points.\n"));
    for round in 2..=6 {
        assert!(report.contains(&format!(
            "Round {}: Player 1 gets a bonus of 5 points.\n",
            round
        )));
    }
    // Team A: (2 + 5 + 25) + (3 + 5); Team B: (4 + 5) + (5 + 5 + 5)
    assert!(report.contains("Player 1 :  32\n"));
    assert!(report.contains(" Team A  40\n"));
    assert!(report.contains(" Team B  24\n"));
    assert!(report.ends_with("Team A wins.\n"));
    Ok(())
}

#[test]
fn test_abbreviated_mixed_case_tokens() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // Player 2 rolls "S" (Six) every round; everyone else rolls garbage or ones.
    let round = "o\nS\nnonsense\n\n";
    let content = round.repeat(6);

    run_game(&temp_dir, "abbrev.dat", &content, TomlConfig::default())?;
    let report = std::fs::read_to_string(temp_dir.path().join("abbrev.rpt"))?;

    assert!(report.contains(&format!("Player 2: {}\n", "Six   ".repeat(6))));
    assert!(report.contains(" Team A  12\n"));
    assert!(report.contains(" Team B  72\n"));
    assert!(report.ends_with("Team B wins.\n"));
    Ok(())
}

#[test]
fn test_tied_teams() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut lines = Vec::new();
    for _ in 0..3 {
        lines.extend(["Six", "Five", "One", "One"]);
    }
    for _ in 0..3 {
        lines.extend(["Five", "Six", "One", "One"]);
    }

    run_game(&temp_dir, "tie.txt", &lines.join("\n"), TomlConfig::default())?;
    let report = std::fs::read_to_string(temp_dir.path().join("tie.rpt"))?;

    assert!(report.contains("Round 3: Player 1 gets a bonus of 5 points.\n"));
    assert!(report.contains("Round 4: Player 2 gets a bonus of 5 points.\n"));
    assert!(report.contains("Player 1 :  48\n"));
    assert!(report.contains("Player 2 :  48\n"));
    assert!(report.contains(" Team A  54\n"));
    assert!(report.contains(" Team B  54\n"));
    assert!(report.ends_with("It's a tie!\n"));
    Ok(())
}

#[test]
fn test_exports_into_output_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let out_dir = temp_dir.path().join("reports");
    let toml_content = format!(
        "[report]\noutput_dir = \"{}\"\nformats = [\"rpt\", \"json\", \"csv\"]\n",
        out_dir.to_string_lossy().replace('\\', "/")
    );
    let config = TomlConfig::from_toml_str(&toml_content)?;

    run_game(&temp_dir, "game.txt", &"Four\n".repeat(24), config)?;

    assert!(out_dir.join("game.rpt").exists());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("game.json"))?)?;
    assert_eq!(json["players"][0]["total"], 24 + 30);
    assert_eq!(json["verdict"], "Team A wins.");

    let csv = std::fs::read_to_string(out_dir.join("game.csv"))?;
    assert_eq!(csv.lines().count(), 5);
    Ok(())
}
