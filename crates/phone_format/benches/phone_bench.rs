use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use mask_core::{
    CaretState, Direction, EditOutcome, EditRequest, FailureRecord, FieldId, FieldState,
    FieldStore,
};
use phone_format::{PhoneFormatter, ValidationFailure};

const RAW_NUMBERS: [&str; 6] = [
    "4155551234",
    "14155551234",
    "+14155551234",
    "+543213433555",
    "+2323213433555",
    "1 (415) 555 1234",
];

fn bench_format(c: &mut Criterion) {
    let formatter = PhoneFormatter::new();
    c.bench_function("bench_format", |b| {
        b.iter(|| {
            for raw in RAW_NUMBERS {
                black_box(formatter.format(black_box(raw)));
            }
        });
    });
}

fn bench_type_number(c: &mut Criterion) {
    let formatter = PhoneFormatter::new();
    c.bench_function("bench_type_number", |b| {
        b.iter(|| {
            let mut state = FieldState::default();
            for ch in black_box("+854 314 555 1234").chars() {
                state = formatter
                    .translate_edit(&state.text, state.caret, &EditRequest::Insert(ch))
                    .into_state(&state.text, state.caret);
            }
            black_box(state);
        });
    });
}

fn bench_backspace_number(c: &mut Criterion) {
    let formatter = PhoneFormatter::new();
    let full = FieldState::at_end("+1 (314) 555-1234");
    c.bench_function("bench_backspace_number", |b| {
        b.iter_batched(
            || full.clone(),
            |mut state| {
                while let EditOutcome::Applied(next) =
                    formatter.translate_edit(&state.text, state.caret, &EditRequest::Backspace)
                {
                    state = next;
                }
                black_box(state);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_shift_select_all_digits(c: &mut Criterion) {
    let formatter = PhoneFormatter::new();
    let text = "1 (314) 555-1234";
    let left = EditRequest::ExtendSelection(Direction::Left);
    c.bench_function("bench_shift_select_all_digits", |b| {
        b.iter(|| {
            let mut caret = CaretState::Caret(text.len());
            while let EditOutcome::Applied(next) = formatter.translate_edit(text, caret, &left) {
                caret = next.caret;
            }
            black_box(caret);
        });
    });
}

fn bench_store_settle(c: &mut Criterion) {
    c.bench_function("bench_store_settle", |b| {
        b.iter_batched(
            || FieldStore::new(PhoneFormatter::new()),
            |mut store| {
                let id = FieldId::from_raw(1);
                store.type_str(id, black_box("1 206 123 0712"));
                let mut failures: Vec<FailureRecord<ValidationFailure>> = Vec::new();
                black_box(store.value(id, &mut failures));
                black_box(failures);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_format,
    bench_type_number,
    bench_backspace_number,
    bench_shift_select_all_digits,
    bench_store_settle
);
criterion_main!(benches);
