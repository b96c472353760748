pub(super) type Templates = [(&'static str, &'static str); 15];

pub(super) const EN: Templates = [
    ("epsilon", "Moments ago"),
    ("millisecond_ago", "1 millisecond ago"),
    ("milliseconds_ago", "{num} milliseconds ago"),
    ("second_ago", "1 second ago"),
    ("seconds_ago", "{num} seconds ago"),
    ("minute_ago", "1 minute ago"),
    ("minutes_ago", "{num} minutes ago"),
    ("hour_ago", "1 hour ago"),
    ("hours_ago", "{num} hours ago"),
    ("day_ago", "1 day ago"),
    ("days_ago", "{num} days ago"),
    ("month_ago", "1 month ago"),
    ("months_ago", "{num} months ago"),
    ("year_ago", "1 year ago"),
    ("years_ago", "{num} years ago"),
];

pub(super) const FR: Templates = [
    ("epsilon", "Il y a quelques instants"),
    ("millisecond_ago", "Il y a 1 milliseconde"),
    ("milliseconds_ago", "Il y a {num} millisecondes"),
    ("second_ago", "Il y a 1 seconde"),
    ("seconds_ago", "Il y a {num} secondes"),
    ("minute_ago", "Il y a 1 minute"),
    ("minutes_ago", "Il y a {num} minutes"),
    ("hour_ago", "Il y a 1 heure"),
    ("hours_ago", "Il y a {num} heures"),
    ("day_ago", "Il y a 1 jour"),
    ("days_ago", "Il y a {num} jours"),
    ("month_ago", "Il y a 1 mois"),
    ("months_ago", "Il y a {num} mois"),
    ("year_ago", "Il y a 1 an"),
    ("years_ago", "Il y a {num} ans"),
];

pub(super) const ES: Templates = [
    ("epsilon", "Hace unos momentos"),
    ("millisecond_ago", "Hace 1 milisegundo"),
    ("milliseconds_ago", "Hace {num} milisegundos"),
    ("second_ago", "Hace 1 segundo"),
    ("seconds_ago", "Hace {num} segundos"),
    ("minute_ago", "Hace 1 minuto"),
    ("minutes_ago", "Hace {num} minutos"),
    ("hour_ago", "Hace 1 hora"),
    ("hours_ago", "Hace {num} horas"),
    ("day_ago", "Hace 1 día"),
    ("days_ago", "Hace {num} días"),
    ("month_ago", "Hace 1 mes"),
    ("months_ago", "Hace {num} meses"),
    ("year_ago", "Hace 1 año"),
    ("years_ago", "Hace {num} años"),
];

pub(super) const LOCALES: [(&str, &Templates); 3] = [("en", &EN), ("fr", &FR), ("es", &ES)];
