use bounce_engine::api::options::{
    coverage_prompt, energy_prompt, prompts_before_energy, Prompt, GRAVITY_QUESTION,
};
use bounce_engine::OptionAnswers;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Ask the startup questions with blocking browser dialogs.
pub fn collect_answers(window: &Window) -> Result<OptionAnswers, JsValue> {
    let mut answers = OptionAnswers::default();
    for prompt in prompts_before_energy() {
        ask(window, &prompt, &mut answers)?;
    }
    ask(window, &energy_prompt(answers.max_speed()), &mut answers)?;
    ask(window, &coverage_prompt(), &mut answers)?;
    answers.disable_gravity = window.confirm_with_message(GRAVITY_QUESTION)?;
    Ok(answers)
}

fn ask(window: &Window, prompt: &Prompt, answers: &mut OptionAnswers) -> Result<(), JsValue> {
    let answer = window.prompt_with_message(&prompt.message)?;
    answers.set(prompt.key, answer);
    Ok(())
}
