//! # Omnicalc CLI Application
//!
//! Plain-stdin terminal front end for the calculation engine. Presents the
//! catalog as a numbered menu, prompts for each input, and prints both a
//! human-readable summary and the JSON result.
//!
//! On invalid input the engine returns an error; the CLI prints it and the
//! previous state is left alone, matching how the single-page calculators
//! behave in a browser.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use rand::thread_rng;

use omnicalc_core::calculations::bmi::BmiInput;
use omnicalc_core::calculations::body_fat::BodyFatInput;
use omnicalc_core::calculations::calorie::{ActivityLevel, CalorieInput, Goal};
use omnicalc_core::calculations::dates::{
    AgeInput, DateDifferenceInput, ShiftDateInput, ShiftDirection,
};
use omnicalc_core::calculations::fraction::{Fraction, FractionInput, FractionOp};
use omnicalc_core::calculations::gpa::{Course, GpaInput, GradeScale, LetterGrade};
use omnicalc_core::calculations::ideal_weight::IdealWeightInput;
use omnicalc_core::calculations::interest::{CompoundFrequency, InterestInput};
use omnicalc_core::calculations::loan::{
    AutoLoanInput, LoanInput, MortgageInput, PaymentFrequency,
};
use omnicalc_core::calculations::password::{score_strength, PasswordOptions, StrengthLabel};
use omnicalc_core::calculations::random::RandomNumbersInput;
use omnicalc_core::calculations::scientific::{AngleMode, BinaryOp, Calculator, UnaryFunc};
use omnicalc_core::calculations::triangle::TriangleSidesInput;
use omnicalc_core::calculations::{
    bmi, body_fat, calorie, dates, fraction, gpa, ideal_weight, interest, loan, password,
    percentage, random, triangle, Sex,
};
use omnicalc_core::catalog::{CalculatorId, ALL_CALCULATORS};

// ============================================================================
// Prompt Helpers
// ============================================================================

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_i64(prompt: &str, default: i64) -> i64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    match prompt_line(prompt).to_lowercase().as_str() {
        "y" | "yes" | "true" => true,
        "n" | "no" | "false" => false,
        _ => default,
    }
}

fn prompt_date(prompt: &str, default: NaiveDate) -> NaiveDate {
    NaiveDate::parse_from_str(&prompt_line(prompt), "%Y-%m-%d").unwrap_or(default)
}

fn prompt_sex() -> Sex {
    match prompt_line("Sex (m/f) [m]: ").to_lowercase().as_str() {
        "f" | "female" => Sex::Female,
        _ => Sex::Male,
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    if let Ok(json) = serde_json::to_string_pretty(value) {
        println!();
        println!("JSON:");
        println!("{}", json);
    }
}

fn print_error(e: &omnicalc_core::CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

// ============================================================================
// Per-Calculator Flows
// ============================================================================

fn run_loan() {
    let input = LoanInput {
        principal: prompt_f64("Loan amount ($) [25000]: ", 25_000.0),
        annual_rate_pct: prompt_f64("Annual interest rate (%) [5.0]: ", 5.0),
        term_years: prompt_f64("Term (years) [5]: ", 5.0),
        frequency: PaymentFrequency::Monthly,
    };
    match loan::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Payment:        ${:.2} / month", result.payment);
            println!("Total payment:  ${:.2}", result.total_payment);
            println!("Total interest: ${:.2}", result.total_interest);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_mortgage() {
    let input = MortgageInput {
        home_price: prompt_f64("Home price ($) [400000]: ", 400_000.0),
        down_payment: prompt_f64("Down payment ($) [80000]: ", 80_000.0),
        annual_rate_pct: prompt_f64("Annual interest rate (%) [6.5]: ", 6.5),
        term_years: prompt_u32("Term (years) [30]: ", 30),
    };
    match loan::calculate_mortgage(&input) {
        Ok(result) => {
            println!();
            println!("Monthly payment: ${:.2}", result.monthly_payment);
            println!("Total payment:   ${:.2}", result.total_payment);
            println!("Total interest:  ${:.2}", result.total_interest);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_auto_loan() {
    let input = AutoLoanInput {
        vehicle_price: prompt_f64("Vehicle price ($) [35000]: ", 35_000.0),
        down_payment: prompt_f64("Down payment ($) [0]: ", 0.0),
        trade_in_value: prompt_f64("Trade-in value ($) [0]: ", 0.0),
        sales_tax_pct: prompt_f64("Sales tax (%) [0]: ", 0.0),
        annual_rate_pct: prompt_f64("Annual interest rate (%) [7.0]: ", 7.0),
        term_months: prompt_u32("Term (months) [60]: ", 60),
    };
    match loan::calculate_auto_loan(&input) {
        Ok(result) => {
            println!();
            println!("Amount financed: ${:.2}", result.loan_amount);
            println!("Monthly payment: ${:.2}", result.monthly_payment);
            println!("Total interest:  ${:.2}", result.total_interest);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_interest() {
    let frequency = match prompt_line("Compounding (a/q/m/d) [m]: ").as_str() {
        "a" => CompoundFrequency::Annually,
        "q" => CompoundFrequency::Quarterly,
        "d" => CompoundFrequency::Daily,
        _ => CompoundFrequency::Monthly,
    };
    let input = InterestInput {
        principal: prompt_f64("Principal ($) [1000]: ", 1000.0),
        annual_rate_pct: prompt_f64("Annual rate (%) [5.0]: ", 5.0),
        years: prompt_f64("Years [2]: ", 2.0),
        frequency,
    };
    match interest::calculate(&input) {
        Ok(result) => {
            println!();
            println!(
                "Simple:   ${:.2} interest, ${:.2} total",
                result.simple_interest, result.total_amount_simple
            );
            println!(
                "Compound: ${:.2} interest, ${:.2} total",
                result.compound_interest, result.total_amount_compound
            );
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_bmi() {
    let input = BmiInput::Metric {
        height_cm: prompt_f64("Height (cm) [175]: ", 175.0),
        weight_kg: prompt_f64("Weight (kg) [70]: ", 70.0),
    };
    match bmi::calculate(&input) {
        Ok(result) => {
            println!();
            println!("BMI:      {:.1}", result.bmi);
            println!("Category: {}", result.category.display_name());
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_body_fat() {
    let sex = prompt_sex();
    let input = BodyFatInput {
        sex,
        height_cm: prompt_f64("Height (cm) [175]: ", 175.0),
        weight_kg: prompt_f64("Weight (kg) [75]: ", 75.0),
        neck_cm: prompt_f64("Neck circumference (cm) [37]: ", 37.0),
        waist_cm: prompt_f64("Waist circumference (cm) [85]: ", 85.0),
        hip_cm: match sex {
            Sex::Male => None,
            Sex::Female => Some(prompt_f64("Hip circumference (cm) [95]: ", 95.0)),
        },
    };
    match body_fat::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Body fat:  {:.1}%", result.body_fat_pct);
            println!("Category:  {}", result.category.display_name());
            println!("Fat mass:  {:.1} kg", result.fat_mass_kg);
            println!("Lean mass: {:.1} kg", result.lean_body_mass_kg);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_ideal_weight() {
    let input = IdealWeightInput {
        sex: prompt_sex(),
        height_cm: prompt_f64("Height (cm) [175]: ", 175.0),
    };
    match ideal_weight::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Robinson: {:.1} kg", result.robinson_kg);
            println!("Miller:   {:.1} kg", result.miller_kg);
            println!("Devine:   {:.1} kg", result.devine_kg);
            println!("Hamwi:    {:.1} kg", result.hamwi_kg);
            println!(
                "Healthy BMI range: {:.1} - {:.1} kg",
                result.healthy_min_kg, result.healthy_max_kg
            );
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_calorie() {
    let activity = match prompt_u32("Activity 1=sedentary 2=light 3=moderate 4=active 5=very [3]: ", 3)
    {
        1 => ActivityLevel::Sedentary,
        2 => ActivityLevel::Light,
        4 => ActivityLevel::Active,
        5 => ActivityLevel::VeryActive,
        _ => ActivityLevel::Moderate,
    };
    let goal = match prompt_u32(
        "Goal 1=maintain 2=lose 0.5lb/wk 3=lose 1lb/wk 4=gain 0.5lb/wk 5=gain 1lb/wk [1]: ",
        1,
    ) {
        2 => Goal::LoseSlow,
        3 => Goal::LoseFast,
        4 => Goal::GainSlow,
        5 => Goal::GainFast,
        _ => Goal::Maintain,
    };
    let input = CalorieInput {
        sex: prompt_sex(),
        age_years: prompt_f64("Age (years) [30]: ", 30.0),
        height_cm: prompt_f64("Height (cm) [175]: ", 175.0),
        weight_kg: prompt_f64("Weight (kg) [70]: ", 70.0),
        activity,
        goal,
    };
    match calorie::calculate(&input) {
        Ok(result) => {
            println!();
            println!("BMR:  {:.0} kcal/day", result.bmr);
            println!("TDEE: {:.0} kcal/day", result.tdee);
            println!(
                "Goal: {:.0} kcal/day ({})",
                result.goal_calories, result.goal_description
            );
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_date_shift() {
    let default = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let direction = if prompt_bool("Subtract instead of add? (y/n) [n]: ", false) {
        ShiftDirection::Subtract
    } else {
        ShiftDirection::Add
    };
    let input = ShiftDateInput {
        date: prompt_date("Start date (YYYY-MM-DD) [2024-01-01]: ", default),
        days: prompt_i64("Days [30]: ", 30).unsigned_abs(),
        direction,
    };
    match dates::shift_date(&input) {
        Ok(result) => {
            println!();
            println!("Result: {}", result.date);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_date_difference() {
    let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let d2 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();
    let input = DateDifferenceInput {
        date1: prompt_date("First date (YYYY-MM-DD) [2024-01-01]: ", d1),
        date2: prompt_date("Second date (YYYY-MM-DD) [2024-03-01]: ", d2),
    };
    match dates::date_difference(&input) {
        Ok(result) => {
            println!();
            println!("Days:   {}", result.days);
            println!("Weeks:  {}", result.weeks);
            println!("Calendar: {} years, {} months", result.years, result.months);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_age() {
    let birth_default = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap_or_default();
    let target_default = NaiveDate::from_ymd_opt(2024, 8, 29).unwrap_or_default();
    let input = AgeInput {
        birth_date: prompt_date("Birth date (YYYY-MM-DD) [1990-06-15]: ", birth_default),
        target_date: prompt_date("As-of date (YYYY-MM-DD) [2024-08-29]: ", target_default),
    };
    match dates::age(&input) {
        Ok(result) => {
            println!();
            println!(
                "Age: {} years, {} months, {} days",
                result.years, result.months, result.days
            );
            println!("Total days lived: {}", result.total_days);
            println!(
                "Next birthday: {} ({} days away)",
                result.next_birthday, result.days_until_birthday
            );
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_fraction() {
    let op = match prompt_line("Operation (+ - * /) [+]: ").as_str() {
        "-" => FractionOp::Subtract,
        "*" => FractionOp::Multiply,
        "/" => FractionOp::Divide,
        _ => FractionOp::Add,
    };
    let input = FractionInput {
        first: Fraction::new(
            prompt_i64("First numerator [1]: ", 1),
            prompt_i64("First denominator [2]: ", 2),
        ),
        second: Fraction::new(
            prompt_i64("Second numerator [1]: ", 1),
            prompt_i64("Second denominator [3]: ", 3),
        ),
        op,
    };
    match fraction::calculate(&input) {
        Ok(result) => {
            println!();
            println!(
                "{} {} {} = {} = {} = {}",
                input.first,
                input.op.symbol(),
                input.second,
                result.raw,
                result.simplified,
                result.decimal
            );
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_percentage() {
    println!("1) What is X% of Y");
    println!("2) X is what percent of Y");
    println!("3) Percent change from X to Y");
    match prompt_u32("Mode [1]: ", 1) {
        2 => {
            let value = prompt_f64("X [50]: ", 50.0);
            let total = prompt_f64("Y [200]: ", 200.0);
            match percentage::what_percent(value, total) {
                Ok(pct) => println!("{} is {:.2}% of {}", value, pct, total),
                Err(e) => print_error(&e),
            }
        }
        3 => {
            let old_value = prompt_f64("Old value [100]: ", 100.0);
            let new_value = prompt_f64("New value [125]: ", 125.0);
            match percentage::percent_change(old_value, new_value) {
                Ok(change) => {
                    let word = if change.increase { "increase" } else { "decrease" };
                    println!("{:.2}% {}", change.magnitude_pct, word);
                    print_json(&change);
                }
                Err(e) => print_error(&e),
            }
        }
        _ => {
            let pct = prompt_f64("Percent [25]: ", 25.0);
            let value = prompt_f64("Of value [200]: ", 200.0);
            println!("{}% of {} = {}", pct, value, percentage::percentage_of(pct, value));
        }
    }
}

fn run_triangle() {
    let input = TriangleSidesInput {
        side_a: prompt_f64("Side a [3]: ", 3.0),
        side_b: prompt_f64("Side b [4]: ", 4.0),
        side_c: prompt_f64("Side c [5]: ", 5.0),
    };
    match triangle::analyze_sides(&input) {
        Ok(result) => {
            println!();
            println!("Type:      {}", result.type_label());
            println!("Area:      {:.4}", result.area);
            println!("Perimeter: {:.4}", result.perimeter);
            println!(
                "Angles:    A={:.2} deg, B={:.2} deg, C={:.2} deg",
                result.angle_a_deg, result.angle_b_deg, result.angle_c_deg
            );
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_random() {
    let input = RandomNumbersInput {
        min: prompt_i64("Minimum [1]: ", 1),
        max: prompt_i64("Maximum [100]: ", 100),
        count: prompt_usize("How many [5]: ", 5),
        allow_duplicates: prompt_bool("Allow duplicates? (y/n) [y]: ", true),
    };
    match random::generate(&input, &mut thread_rng()) {
        Ok(numbers) => {
            println!();
            println!(
                "{}",
                numbers
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Err(e) => print_error(&e),
    }
}

fn run_password() {
    let options = PasswordOptions {
        length: prompt_usize("Length [16]: ", 16),
        include_uppercase: prompt_bool("Uppercase? (y/n) [y]: ", true),
        include_lowercase: prompt_bool("Lowercase? (y/n) [y]: ", true),
        include_digits: prompt_bool("Digits? (y/n) [y]: ", true),
        include_symbols: prompt_bool("Symbols? (y/n) [y]: ", true),
        exclude_ambiguous: prompt_bool("Exclude ambiguous (il1Lo0O)? (y/n) [n]: ", false),
    };
    match password::generate(&options, &mut thread_rng()) {
        Ok(pwd) => {
            let score = score_strength(&pwd);
            let label = StrengthLabel::from_score(score);
            println!();
            println!("Password: {}", pwd);
            println!("Strength: {} (score {}/7)", label.display_name(), score);
        }
        Err(e) => print_error(&e),
    }
}

fn run_gpa() {
    let scale = if prompt_bool("Use 5.0 scale? (y/n) [n]: ", false) {
        GradeScale::FivePoint
    } else {
        GradeScale::FourPoint
    };
    let mut courses = Vec::new();
    loop {
        let grade_text = prompt_line("Grade (A+ .. F, blank to finish): ");
        if grade_text.is_empty() {
            break;
        }
        let grade = match grade_text.to_uppercase().as_str() {
            "A+" => LetterGrade::APlus,
            "A" => LetterGrade::A,
            "A-" => LetterGrade::AMinus,
            "B+" => LetterGrade::BPlus,
            "B" => LetterGrade::B,
            "B-" => LetterGrade::BMinus,
            "C+" => LetterGrade::CPlus,
            "C" => LetterGrade::C,
            "C-" => LetterGrade::CMinus,
            "D+" => LetterGrade::DPlus,
            "D" => LetterGrade::D,
            "D-" => LetterGrade::DMinus,
            "F" => LetterGrade::F,
            other => {
                println!("Unrecognized grade '{}', skipping row", other);
                continue;
            }
        };
        let credits = prompt_f64("Credits [3]: ", 3.0);
        courses.push(Course {
            grade: Some(grade),
            credits,
        });
    }
    match gpa::calculate(&GpaInput { courses, scale }) {
        Ok(result) => {
            println!();
            println!("GPA: {:.2} over {} credits", result.gpa, result.total_credits);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_scientific() {
    println!("Scientific calculator. Keys: digits, '.', + - * / =,");
    println!("functions (sin cos tan asin acos atan ln log sqrt cbrt sq cube fact inv exp pow10 pct pi e),");
    println!("'rad'/'deg' to switch angle mode, 'c' clear, 'ce' clear entry, 'q' to quit.");

    let mut calc = Calculator::new();
    loop {
        let key = prompt_line(&format!("[{}] > ", calc.display()));
        match key.as_str() {
            "q" | "quit" => break,
            "" => continue,
            "c" => calc.clear(),
            "ce" => calc.clear_entry(),
            "." => calc.input_decimal(),
            "rad" => calc.set_angle_mode(AngleMode::Radians),
            "deg" => calc.set_angle_mode(AngleMode::Degrees),
            "+" => calc.input_operation(BinaryOp::Add),
            "-" => calc.input_operation(BinaryOp::Subtract),
            "*" => calc.input_operation(BinaryOp::Multiply),
            "/" => calc.input_operation(BinaryOp::Divide),
            "=" => calc.input_operation(BinaryOp::Equals),
            "sin" => calc.input_function(UnaryFunc::Sin),
            "cos" => calc.input_function(UnaryFunc::Cos),
            "tan" => calc.input_function(UnaryFunc::Tan),
            "asin" => calc.input_function(UnaryFunc::Asin),
            "acos" => calc.input_function(UnaryFunc::Acos),
            "atan" => calc.input_function(UnaryFunc::Atan),
            "ln" => calc.input_function(UnaryFunc::Ln),
            "log" => calc.input_function(UnaryFunc::Log10),
            "sqrt" => calc.input_function(UnaryFunc::Sqrt),
            "cbrt" => calc.input_function(UnaryFunc::Cbrt),
            "sq" => calc.input_function(UnaryFunc::Square),
            "cube" => calc.input_function(UnaryFunc::Cube),
            "fact" => calc.input_function(UnaryFunc::Factorial),
            "inv" => calc.input_function(UnaryFunc::Reciprocal),
            "exp" => calc.input_function(UnaryFunc::Exp),
            "pow10" => calc.input_function(UnaryFunc::Pow10),
            "pct" => calc.input_function(UnaryFunc::Percent),
            "pi" => calc.input_function(UnaryFunc::Pi),
            "e" => calc.input_function(UnaryFunc::E),
            other => {
                // Multi-digit entry like "42" keys each digit in turn
                if other.chars().all(|c| c.is_ascii_digit()) {
                    for c in other.chars() {
                        if let Some(d) = c.to_digit(10) {
                            calc.input_digit(d as u8);
                        }
                    }
                } else {
                    println!("Unrecognized key: {}", other);
                }
            }
        }
    }
}

fn run_calculator(id: CalculatorId) {
    println!();
    println!("=== {} ===", id.metadata().name);
    match id {
        CalculatorId::Scientific => run_scientific(),
        CalculatorId::Loan => run_loan(),
        CalculatorId::Mortgage => run_mortgage(),
        CalculatorId::AutoLoan => run_auto_loan(),
        CalculatorId::Interest => run_interest(),
        CalculatorId::Bmi => run_bmi(),
        CalculatorId::BodyFat => run_body_fat(),
        CalculatorId::IdealWeight => run_ideal_weight(),
        CalculatorId::Calorie => run_calorie(),
        CalculatorId::DateShift => run_date_shift(),
        CalculatorId::DateDifference => run_date_difference(),
        CalculatorId::Age => run_age(),
        CalculatorId::Fraction => run_fraction(),
        CalculatorId::Percentage => run_percentage(),
        CalculatorId::Triangle => run_triangle(),
        CalculatorId::RandomNumber => run_random(),
        CalculatorId::Password => run_password(),
        CalculatorId::Gpa => run_gpa(),
        _ => println!("Not wired up yet."),
    }
}

fn main() {
    println!("Omnicalc CLI - Everyday Calculators");
    println!("===================================");

    loop {
        println!();
        for (i, calc) in ALL_CALCULATORS.iter().enumerate() {
            println!("{:2}) {}", i + 1, calc.metadata().name);
        }
        println!(" q) Quit");

        let choice = prompt_line("Choose a calculator: ");
        if choice == "q" || choice == "quit" {
            break;
        }
        match choice.parse::<usize>() {
            Ok(n) if n >= 1 && n <= ALL_CALCULATORS.len() => {
                run_calculator(ALL_CALCULATORS[n - 1]);
            }
            _ => println!("Pick a number between 1 and {}.", ALL_CALCULATORS.len()),
        }
    }
}
