#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const MENU_HEADER: &str = "categoria,nome,prezzo,descrizione,allergeni,tag,disponibile";

/// Binary with an isolated home (config + cache) for the given test name.
pub fn mb(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("menuboard");
    cmd.env("MENUBOARD_HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Create a fresh directory inside the system temp dir
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_menuboard", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Write a file inside the test home and return its path as String
pub fn write_file(home: &PathBuf, name: &str, content: &str) -> String {
    let p = home.join(name);
    fs::write(&p, content).expect("write test file");
    p.to_string_lossy().to_string()
}

/// Small menu used by most tests
pub fn sample_menu(home: &PathBuf) -> String {
    let body = format!(
        "{MENU_HEADER}\n\
         Caffetteria,Espresso,\"1,20\",,,,\n\
         Bibite Fredde,Coca Cola,\"3,00\",,,,\n\
         Bibite,Aranciata,\"2,50\",,,,no\n\
         Vini e Cocktail,Negroni,\"7,00\",Gin rosso e bitter,,hot,\n\
         Dolci,Tiramisù,\"4,00\",,\"latte, uova\",new,soldout\n\
         AVVISO,Chiuso 25/12,,Buone feste,,,\n"
    );
    write_file(home, "menu.csv", &body)
}

/// Friday 22:00-02:00, Monday closed, other days 07:00-24:00
pub fn sample_hours(home: &PathBuf) -> String {
    let body = "day,start,end\n\
                lunedì,CHIUSO,CHIUSO\n\
                martedì,07:00,24:00\n\
                mer,07:00,24:00\n\
                giovedi,07:00,24:00\n\
                venerdì,22:00,02:00\n\
                sabato,07:00,24:00\n\
                domenica,07:00,24:00\n";
    write_file(home, "orari.csv", body)
}
