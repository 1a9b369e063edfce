//! Writer Benchmark
//!
//! Measures writer throughput (bytes/sec) for classes of increasing size and
//! the cost of annotation literal rendering.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use javagen::{
    AnnotationData, AnnotationMember, ClassRef, JavaWriter, Literal, Parameter, StringSink, Type,
};

// =============================================================================
// Workloads
// =============================================================================

fn column_annotation(index: usize) -> AnnotationData {
    AnnotationData::new(Type::named("javax.persistence.Column"))
        .member(AnnotationMember::new("name", format!("col_{index}")).with_default(""))
        .member(AnnotationMember::new("nullable", index % 2 == 0).with_default(true))
        .member(AnnotationMember::new("length", 255).with_default(255))
}

/// Entity class with `fields` annotated fields and accessors.
fn write_entity_body(w: &mut JavaWriter<'_, StringSink>, fields: usize) -> javagen::Result<()> {
    w.package_decl("com.example.model")?
        .import_packages(&["javax.persistence", "java.util"])?
        .begin_class(
            &Type::named("com.example.model.Entity"),
            None,
            &[Type::named("java.io.Serializable")],
        )?;
    for i in 0..fields {
        let name = format!("field{i}");
        let ty = Type::list(Type::string());
        w.annotation(&column_annotation(i))?
            .private_field(&ty, &name)?
            .begin_public_method(&ty, &format!("getField{i}"), &[])?
            .line(&format!("return {name};"))?
            .end()?
            .begin_public_method(
                &Type::void(),
                &format!("setField{i}"),
                &[Parameter::new(name.clone(), ty.clone())],
            )?
            .line(&format!("this.{name} = {name};"))?
            .end()?;
    }
    w.end()?;
    Ok(())
}

fn write_entity(fields: usize) -> String {
    let mut sink = StringSink::with_capacity(fields * 160);
    {
        let mut w = JavaWriter::new(&mut sink);
        let _ = black_box(write_entity_body(&mut w, fields));
    }
    sink.into_string()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_entity_classes(c: &mut Criterion) {
    let mut group = c.benchmark_group("writer_entity");
    for fields in [1usize, 10, 100] {
        let bytes = write_entity(fields).len() as u64;
        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(BenchmarkId::from_parameter(fields), &fields, |b, &n| {
            b.iter(|| write_entity(black_box(n)))
        });
    }
    group.finish();
}

fn bench_annotation_literals(c: &mut Criterion) {
    let policy = ClassRef::parse("java.lang.annotation.RetentionPolicy");
    let annotation = AnnotationData::new(Type::named("com.example.meta.Mapping"))
        .member(AnnotationMember::new("path", "/a/\"quoted\"/\u{e9}"))
        .member(AnnotationMember::new(
            "policy",
            Literal::enum_constant(policy, "RUNTIME"),
        ))
        .member(AnnotationMember::new(
            "values",
            (0..32).map(Literal::Int).collect::<Vec<_>>(),
        ));

    c.bench_function("writer_annotation", |b| {
        b.iter(|| {
            let mut sink = StringSink::new();
            {
                let mut w = JavaWriter::new(&mut sink);
                let _ = black_box(w.annotation(black_box(&annotation)));
            }
            sink.into_string()
        })
    });
}

criterion_group!(benches, bench_entity_classes, bench_annotation_literals);
criterion_main!(benches);
