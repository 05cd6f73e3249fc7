//! Plain-text assessment report.
//!
//! Pure formatting over an already computed [`Assessment`]: nothing here
//! re-derives a classification, score or recommendation.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::entities::assessment::Assessment;
use crate::entities::patient::PatientRecord;

const RULE: &str = "==================================================";

/// Lifestyle advice lines for the modifiable risk factors present
pub fn lifestyle_advice(record: &PatientRecord, bmi: f64) -> Vec<&'static str> {
    let factors = &record.risk_factors;
    let mut advice = Vec::new();

    if factors.smoking {
        advice.push("Smoking cessation: offer counselling and pharmacotherapy");
    }
    if factors.high_salt || factors.poor_diet {
        advice.push("DASH diet with sodium below 2,300 mg/day (ideally 1,500 mg/day)");
    }
    if bmi >= 25.0 {
        advice.push("Weight reduction: aim for 5-10% of body weight");
    }
    if factors.physical_inactivity {
        advice.push("Aerobic exercise at least 150 minutes/week of moderate intensity");
    }
    if factors.alcohol {
        advice.push("Limit alcohol to 2 drinks/day for men, 1 drink/day for women");
    }
    if factors.stress {
        advice.push("Stress management: relaxation techniques, mindfulness");
    }
    if factors.sleep_deprivation {
        advice.push("Sleep hygiene: aim for 7-9 hours per night");
    }
    if factors.sleep_apnea_symptoms {
        advice.push("Refer for sleep study to evaluate obstructive sleep apnea");
    }
    advice
}

fn comorbidity_lines(record: &PatientRecord) -> Vec<&'static str> {
    let c = &record.comorbidities;
    [
        (c.diabetes, "Diabetes Mellitus"),
        (c.cad, "Coronary Artery Disease"),
        (c.ckd, "Chronic Kidney Disease"),
        (c.cva, "Stroke/TIA"),
        (c.dyslipidemia, "Dyslipidemia"),
        (c.thyroid_disorder, "Thyroid Disorder"),
        (c.lvh, "Left Ventricular Hypertrophy"),
        (c.heart_failure, "Heart Failure"),
        (c.pad, "Peripheral Arterial Disease"),
        (c.retinopathy, "Hypertensive Retinopathy"),
        (c.microalbuminuria, "Microalbuminuria/Proteinuria"),
        (c.reduced_gfr, "GFR <60 mL/min"),
    ]
    .into_iter()
    .filter_map(|(present, label)| present.then_some(label))
    .collect()
}

fn risk_factor_lines(record: &PatientRecord) -> Vec<&'static str> {
    let f = &record.risk_factors;
    [
        (f.smoking, "Current Smoker"),
        (f.physical_inactivity, "Physical Inactivity"),
        (f.alcohol, "Alcohol Consumption"),
        (f.high_salt, "High Salt Intake"),
        (f.poor_diet, "Poor Diet Quality"),
        (f.stress, "Chronic Stress"),
        (f.sleep_deprivation, "Sleep Deprivation"),
        (f.sleep_apnea_symptoms, "Sleep Apnea Symptoms"),
    ]
    .into_iter()
    .filter_map(|(present, label)| present.then_some(label))
    .collect()
}

fn family_history_lines(record: &PatientRecord) -> Vec<&'static str> {
    let h = &record.family_history;
    [
        (h.hypertension, "Hypertension"),
        (h.premature_cad, "Premature CAD"),
        (h.stroke, "Stroke/CVA"),
        (h.kidney_disease, "Kidney Disease"),
        (h.diabetes, "Diabetes Mellitus"),
        (h.sudden_cardiac_death, "Sudden Cardiac Death"),
    ]
    .into_iter()
    .filter_map(|(present, label)| present.then_some(label))
    .collect()
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
}

fn bullets(out: &mut String, lines: &[&str], empty: &str) {
    if lines.is_empty() {
        let _ = writeln!(out, "- {}", empty);
    }
    for line in lines {
        let _ = writeln!(out, "- {}", line);
    }
}

/// Compose the plain-text report for a completed assessment
pub fn compose_report(assessment: &Assessment, generated_at: DateTime<Utc>) -> String {
    let record = &assessment.record;
    let bp = &assessment.blood_pressure;
    let risk = &assessment.risk;
    let screening = &assessment.screening;
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "HYPERTENSION ASSESSMENT REPORT");
    let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(out, "{}", RULE);

    section(&mut out, "PATIENT INFORMATION");
    let name = if record.name.trim().is_empty() { "Not recorded" } else { record.name.trim() };
    let _ = writeln!(out, "Name: {}", name);
    let _ = writeln!(out, "Age: {} years", record.age);
    let _ = writeln!(out, "Sex: {}", record.sex);
    let _ = writeln!(out, "Weight: {:.1} kg", record.weight_kg);
    let _ = writeln!(out, "Height: {:.1} cm", record.height_cm);
    let _ = writeln!(out, "BMI: {:.2} kg/m² ({})", assessment.bmi, assessment.bmi_category);
    if let Some(waist) = record.waist_cm {
        let _ = writeln!(out, "Waist Circumference: {:.1} cm", waist);
    }

    section(&mut out, "VITAL SIGNS");
    let _ = writeln!(out, "Blood Pressure: {}/{} mmHg", record.systolic, record.diastolic);
    let _ = writeln!(out, "Classification: {} (severity: {})", bp.category, bp.severity);
    if let Some(heart_rate) = record.heart_rate {
        let _ = writeln!(out, "Heart Rate: {} bpm", heart_rate);
    }
    let _ = writeln!(out, "Duration of Hypertension: {} years", record.htn_duration_years);
    if bp.emergency_referral {
        let _ = writeln!(
            out,
            "*** EMERGENCY: BP ≥180/120 mmHg. Immediate emergency referral required. ***"
        );
    }

    section(&mut out, "RISK ASSESSMENT");
    let _ = writeln!(out, "Cardiovascular Risk Score: {}", risk.score);
    let _ = writeln!(out, "Risk Category: {}", risk.category);
    for contribution in &risk.contributions {
        let _ = writeln!(out, "  {}: +{}", contribution.family, contribution.points);
    }
    let _ = writeln!(out, "Target BP: {}", assessment.target);

    section(&mut out, "COMORBIDITIES");
    bullets(&mut out, &comorbidity_lines(record), "None reported");

    section(&mut out, "RISK FACTORS");
    bullets(&mut out, &risk_factor_lines(record), "None reported");
    let family = family_history_lines(record);
    if !family.is_empty() {
        let _ = writeln!(out, "Family history: {}", family.join(", "));
    }

    if screening.has_findings() {
        section(&mut out, "SECONDARY HYPERTENSION SCREENING");
        if screening.recommended {
            let triggers: Vec<&str> = screening.triggers.iter().map(|t| t.label()).collect();
            let _ = writeln!(out, "Screening recommended: {}", triggers.join(", "));
        }
        if screening.acute_rise {
            let _ = writeln!(out, "- Acute rise of previously stable BP");
        }
        for clue in &screening.renal_clues {
            let _ = writeln!(out, "- Renal: {} -> {}", clue.label(), clue.suggested_workup());
        }
        for clue in &screening.endocrine_clues {
            let _ = writeln!(out, "- Endocrine: {} -> {}", clue.label(), clue.suggested_workup());
        }
    }

    section(&mut out, "RECOMMENDATIONS");
    for line in assessment.medication.approach.advice() {
        let _ = writeln!(out, "{}", line);
    }
    let _ = writeln!(out, "Medication:");
    for recommendation in &assessment.medication.recommendations {
        let _ = writeln!(out, "- {}", recommendation);
    }
    let _ = writeln!(out, "Lifestyle:");
    bullets(
        &mut out,
        &lifestyle_advice(record, assessment.bmi),
        "Maintain current healthy lifestyle",
    );

    section(&mut out, "NEXT STEPS");
    for visit in assessment.monitoring.visits {
        let _ = writeln!(out, "- {}: {}", visit.timepoint, visit.action);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "This report supports, and does not replace, clinical judgement."
    );
    out
}
