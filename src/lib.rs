mod commands;
mod gauge;
mod models;
mod scoring;

#[cfg(test)]
mod test_utils;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .invoke_handler(tauri::generate_handler![
      commands::get_habit_defaults,
      commands::get_input_constraints,
      commands::scoring::evaluate_habits,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
