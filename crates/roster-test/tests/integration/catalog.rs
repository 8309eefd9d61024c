use roster_test::core::model::CourseLevel;
use roster_test::fixtures::catalog_rows;
use roster_test::service::catalog::{
    Catalog, CourseFilter, DepartmentStat, has_corequisites, split_requisites,
};

fn catalog() -> Catalog {
    Catalog::from_rows(catalog_rows())
}

fn ids(courses: &[&roster_test::core::model::Course]) -> Vec<String> {
    courses.iter().map(|c| c.id().to_string()).collect()
}

#[test_log::test]
fn indexing_rules() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 7);

    // Last duplicate wins, first position kept
    let intro = &catalog.courses()[0];
    assert_eq!(intro.id(), "CSEN10");
    assert_eq!(intro.name, "Introduction to Programming in C");
    assert_eq!(intro.description, "Pointers.");

    let networks = catalog.get("CSEN146").expect("indexed");
    assert_eq!(networks.description, "Protocols, layering.");
    assert_eq!(networks.level, CourseLevel::Upper);
}

#[test]
fn explicit_code_search() {
    let catalog = catalog();
    let none = CourseFilter::default();
    assert_eq!(ids(&catalog.search("csen 169", &none)), vec!["CSEN169"]);
    assert_eq!(ids(&catalog.search("CSEN 10L", &none)), vec!["CSEN10L"]);
    assert_eq!(ids(&catalog.search("math 146", &none)), vec!["MATH/CSCI146"]);
}

#[test]
fn staged_search() {
    let catalog = catalog();
    let none = CourseFilter::default();
    assert_eq!(ids(&catalog.search("MATH", &none)), vec!["MATH14"]);
    assert_eq!(
        ids(&catalog.search("caching", &none)),
        vec!["CSEN169"],
        "description matches come last but still match"
    );

    let upper = CourseFilter {
        department: None,
        level: Some(CourseLevel::Upper),
    };
    assert_eq!(
        ids(&catalog.search("", &upper)),
        vec!["CSEN146", "CSEN169", "MATH/CSCI146"]
    );
}

#[test]
fn department_stats() {
    let stats = catalog().department_stats();
    assert_eq!(
        stats,
        vec![
            DepartmentStat {
                tag: "CSEN".to_string(),
                courses: 5
            },
            DepartmentStat {
                tag: "MATH".to_string(),
                courses: 1
            },
            DepartmentStat {
                tag: "MATH/CSCI".to_string(),
                courses: 1
            },
        ]
    );
}

#[test]
fn requisites_and_back_references() {
    let catalog = catalog();

    let networks = catalog.get("CSEN146").expect("indexed");
    let split = split_requisites(&networks.prerequisites);
    assert_eq!(split.prerequisites, "CSEN 12");
    assert_eq!(split.corequisites, "CSEN 146L");
    assert!(has_corequisites(&networks.prerequisites));

    let calculus = catalog.get("MATH14").expect("indexed");
    assert_eq!(
        split_requisites(&calculus.prerequisites).prerequisites,
        "Minimum GPA of 3.0 and MATH 13"
    );

    let required_for = catalog.required_for(networks);
    assert_eq!(ids(&required_for), vec!["CSEN169"]);

    let intro = catalog.get("CSEN10").expect("indexed");
    assert_eq!(ids(&catalog.required_for(intro)), vec!["CSEN10L"]);
}
